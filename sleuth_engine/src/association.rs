//! Clue to suspect associations.
//!
//! A fixed-size hash table with separate chaining. Keys are matched exactly,
//! so unlike [`ClueSet`](crate::clue::ClueSet) letter case matters here.

use thiserror::Error;

/// Bucket count used when none is configured.
pub const DEFAULT_BUCKETS: usize = 101;

const DJB2_SEED: u64 = 5381;

/// djb2 string hash: `hash = hash * 33 + byte` over the UTF-8 bytes.
pub fn djb2(text: &str) -> u64 {
    text.bytes()
        .fold(DJB2_SEED, |hash, byte| hash.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("association table needs at least one bucket")]
    NoBuckets,
}

#[derive(Debug, Clone)]
struct ChainNode {
    clue: String,
    suspect: String,
    next: Option<Box<ChainNode>>,
}

/// Static-sized map from clue text to the suspect it points at.
#[derive(Debug, Clone)]
pub struct AssociationTable {
    buckets: Vec<Option<Box<ChainNode>>>,
    len: usize,
}

impl Default for AssociationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AssociationTable {
    /// Create a table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKETS],
            len: 0,
        }
    }

    /// Create a table with a specific bucket count. The table never grows.
    ///
    /// # Errors
    /// Returns `TableError::NoBuckets` if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::NoBuckets);
        }
        Ok(Self {
            buckets: vec![None; bucket_count],
            len: 0,
        })
    }

    /// Bucket that `clue` hashes into.
    pub fn bucket_index(&self, clue: &str) -> usize {
        // bucket count fits in u64 on every supported target
        (djb2(clue) % self.buckets.len() as u64) as usize
    }

    /// Bind `clue` to `suspect`, replacing any suspect already bound to that exact clue.
    pub fn insert_or_update(&mut self, clue: &str, suspect: &str) {
        let idx = self.bucket_index(clue);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(node) = cursor {
            if node.clue == clue {
                suspect.clone_into(&mut node.suspect);
                return;
            }
            cursor = node.next.as_deref_mut();
        }
        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(ChainNode {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: head,
        }));
        self.len += 1;
    }

    /// Suspect bound to exactly `clue`, if any.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(self.bucket_index(clue))
            .find(|node| node.clue == clue)
            .map(|node| node.suspect.as_str())
    }

    /// Number of distinct clues bound.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the collision chain in bucket `bucket` (0 for out-of-range buckets).
    pub fn chain_len(&self, bucket: usize) -> usize {
        if bucket >= self.buckets.len() {
            return 0;
        }
        self.chain(bucket).count()
    }

    /// Every `(clue, suspect)` pair, in bucket then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        (0..self.buckets.len())
            .flat_map(move |bucket| self.chain(bucket))
            .map(|node| (node.clue.as_str(), node.suspect.as_str()))
    }

    /// Distinct suspect names, sorted.
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().map(|(_, suspect)| suspect).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    fn chain(&self, bucket: usize) -> impl Iterator<Item = &ChainNode> + '_ {
        std::iter::successors(self.buckets[bucket].as_deref(), |node| node.next.as_deref())
    }
}
