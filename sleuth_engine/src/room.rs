//! Room layout definitions.
//!
//! The mansion is a fixed binary tree of rooms. Rooms are stored in an arena
//! owned by [`RoomGraph`] and referred to by [`RoomId`] handles; the topology
//! is wired once through [`RoomGraphBuilder`] and is read-only afterwards.

use std::fmt;

use thiserror::Error;

/// Handle to a room inside the [`RoomGraph`] that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    /// Position of the room in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child slot of a room.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single location in the layout, holding at most one clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Clue text found in this room, if any. Never returns an empty string.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }
    pub fn left(&self) -> Option<RoomId> {
        self.left
    }
    pub fn right(&self) -> Option<RoomId> {
        self.right
    }
    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    /// True if no further room can be reached from here.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Errors raised while wiring the layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no room with handle {0} in this layout")]
    UnknownRoom(RoomId),
    #[error("room '{0}' cannot be its own child")]
    SelfLink(String),
    #[error("room '{child}' already hangs off '{parent}'")]
    AlreadyLinked { child: String, parent: String },
    #[error("room '{parent}' already has a {side} child ('{existing}')")]
    SlotTaken {
        parent: String,
        side: Side,
        existing: String,
    },
    #[error("start room '{0}' cannot be the child of another room")]
    RootAsChild(String),
}

/// Assembles a [`RoomGraph`] from individually created rooms.
///
/// Every room may be linked as a child at most once, so the finished layout is
/// always a tree.
#[derive(Debug, Default)]
pub struct RoomGraphBuilder {
    rooms: Vec<Room>,
    parents: Vec<Option<RoomId>>,
}

impl RoomGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room with no children and return its handle.
    ///
    /// An empty clue is treated the same as no clue.
    pub fn add_room(&mut self, name: impl Into<String>, clue: Option<&str>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.into(),
            clue: clue.filter(|text| !text.is_empty()).map(str::to_string),
            left: None,
            right: None,
        });
        self.parents.push(None);
        id
    }

    /// Attach `child` below `parent` on the given side.
    ///
    /// # Errors
    /// - either handle is unknown
    /// - `child` is `parent`
    /// - `child` already has a parent
    /// - the slot on `parent` is already taken
    pub fn link(&mut self, parent: RoomId, side: Side, child: RoomId) -> Result<(), GraphError> {
        self.check(parent)?;
        self.check(child)?;
        if parent == child {
            return Err(GraphError::SelfLink(self.name_of(child)));
        }
        if let Some(existing_parent) = self.parents[child.0] {
            return Err(GraphError::AlreadyLinked {
                child: self.name_of(child),
                parent: self.name_of(existing_parent),
            });
        }
        if let Some(existing) = self.rooms[parent.0].child(side) {
            return Err(GraphError::SlotTaken {
                parent: self.name_of(parent),
                side,
                existing: self.name_of(existing),
            });
        }

        let slot = &mut self.rooms[parent.0];
        match side {
            Side::Left => slot.left = Some(child),
            Side::Right => slot.right = Some(child),
        }
        self.parents[child.0] = Some(parent);
        Ok(())
    }

    /// Freeze the layout with `root` as the entry room.
    ///
    /// # Errors
    /// - `root` is unknown or is itself somebody's child
    pub fn build(self, root: RoomId) -> Result<RoomGraph, GraphError> {
        self.check(root)?;
        if self.parents[root.0].is_some() {
            return Err(GraphError::RootAsChild(self.name_of(root)));
        }
        Ok(RoomGraph {
            rooms: self.rooms,
            root,
        })
    }

    fn check(&self, id: RoomId) -> Result<(), GraphError> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownRoom(id))
        }
    }

    fn name_of(&self, id: RoomId) -> String {
        self.rooms[id.0].name.clone()
    }
}

/// The finished, read-only room layout.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomGraph {
    /// The entry room.
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Borrow a room by handle.
    ///
    /// # Panics
    /// If `id` was minted by a different builder and is out of range here.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.get(id).and_then(Room::left)
    }

    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.get(id).and_then(Room::right)
    }

    pub fn child(&self, id: RoomId, side: Side) -> Option<RoomId> {
        self.get(id).and_then(|room| room.child(side))
    }

    pub fn clue(&self, id: RoomId) -> Option<&str> {
        self.get(id).and_then(Room::clue)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms reachable from the entry room, in pre-order (self, left, right).
    pub fn reachable_from_root(&self) -> Vec<RoomId> {
        let mut order = Vec::with_capacity(self.rooms.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            let room = self.room(id);
            // right first so left is visited first
            if let Some(right) = room.right {
                stack.push(right);
            }
            if let Some(left) = room.left {
                stack.push(left);
            }
        }
        order
    }
}
