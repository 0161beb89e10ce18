//! Collected clues.
//!
//! [`ClueSet`] is an unbalanced binary search tree of clue text, ordered and
//! deduplicated without regard to letter case. Nodes are kept in an arena and
//! linked by index.

use std::cmp::Ordering;

/// Compare two strings character by character after lower-casing both sides.
///
/// A string that is a strict prefix of the other sorts first.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered set of distinct clues gathered during one exploration.
#[derive(Debug, Clone, Default)]
pub struct ClueSet {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue to the set.
    ///
    /// Empty text is ignored, as is any clue equal (ignoring case) to one already
    /// held; the first spelling wins. Returns true if a new entry was created.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(mut current) = self.root else {
            self.root = Some(self.push_node(text));
            return true;
        };
        loop {
            let node = &self.nodes[current];
            let next = match compare_ignore_case(text, &node.text) {
                Ordering::Equal => return false,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            if let Some(next) = next {
                current = next;
                continue;
            }
            let new_idx = self.push_node(text);
            let parent = &mut self.nodes[current];
            if compare_ignore_case(text, &parent.text) == Ordering::Less {
                parent.left = Some(new_idx);
            } else {
                parent.right = Some(new_idx);
            }
            return true;
        }
    }

    /// Returns true if a clue equal to `text` (ignoring case) is held.
    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match compare_ignore_case(text, &node.text) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// In-order iterator over the clues, ascending without regard to case.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            set: self,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// All clues in ascending case-insensitive order.
    pub fn ordered(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Number of clues for which `predicate` holds. Each clue is visited once.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        self.nodes.iter().filter(|node| predicate(&node.text)).count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, text: &str) -> usize {
        self.nodes.push(ClueNode {
            text: text.to_string(),
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal of a [`ClueSet`].
pub struct Iter<'a> {
    set: &'a ClueSet,
    stack: Vec<usize>,
}

impl Iter<'_> {
    fn descend_left(&mut self, mut current: Option<usize>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.set.nodes[idx].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let set: &'a ClueSet = self.set;
        let node = &set.nodes[idx];
        self.descend_left(node.right);
        Some(node.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_ignores_case() {
        assert_eq!(compare_ignore_case("Key", "key"), Ordering::Equal);
        assert_eq!(compare_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ignore_case("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_ignore_case("Book", "bookcase"), Ordering::Less);
        assert_eq!(compare_ignore_case("BOOKCASE", "book"), Ordering::Greater);
        assert_eq!(compare_ignore_case("", "a"), Ordering::Less);
    }

    #[test]
    fn duplicates_and_case_variants_collapse() {
        let mut clues = ClueSet::new();
        assert!(clues.insert("Key"));
        assert!(!clues.insert("key"));
        assert!(clues.insert("Book"));
        assert!(!clues.insert(""));
        assert_eq!(clues.ordered(), vec!["Book", "Key"]);
        assert_eq!(clues.len(), 2);
    }

    #[test]
    fn traversal_is_sorted_regardless_of_insert_order() {
        let mut clues = ClueSet::new();
        for text in ["mud on the rug", "Broken glass", "stopped clock", "Torn envelope", "broken GLASS", "Old key"] {
            clues.insert(text);
        }
        let ordered = clues.ordered();
        assert_eq!(
            ordered,
            vec!["Broken glass", "mud on the rug", "Old key", "stopped clock", "Torn envelope"]
        );
        for pair in ordered.windows(2) {
            assert_eq!(compare_ignore_case(pair[0], pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn contains_ignores_case() {
        let mut clues = ClueSet::new();
        clues.insert("Torn envelope");
        assert!(clues.contains("TORN ENVELOPE"));
        assert!(!clues.contains("Torn"));
    }

    #[test]
    fn count_visits_every_clue_once() {
        let mut clues = ClueSet::new();
        for text in ["c", "a", "b", "d"] {
            clues.insert(text);
        }
        let mut visits = 0;
        let vowels = clues.count(|text| {
            visits += 1;
            text == "a"
        });
        assert_eq!(vowels, 1);
        assert_eq!(visits, 4);
    }

    #[test]
    fn empty_set() {
        let clues = ClueSet::new();
        assert!(clues.is_empty());
        assert!(clues.ordered().is_empty());
        assert_eq!(clues.count(|_| true), 0);
    }
}
