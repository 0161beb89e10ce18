use serde::{Deserialize, Serialize};

/// Stable identifier used for cross-references inside a case file.
pub type Id = String;

/// Top-level case file loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CaseDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    /// Id of the room exploration starts in; the root of the layout.
    pub start_room: Id,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub associations: Vec<AssociationDef>,
}

impl CaseDef {
    /// Look up a room definition by id.
    pub fn room(&self, id: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|room| room.id == id)
    }
}

/// A single room in the layout.
///
/// `left` and `right` name the child rooms reachable from here. A room may be
/// the child of at most one other room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub left: Option<Id>,
    #[serde(default)]
    pub right: Option<Id>,
}

/// Binds a clue (by its exact text) to the suspect it implicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssociationDef {
    pub clue: String,
    pub suspect: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_lookup_by_id() {
        let case = CaseDef {
            title: "Test".into(),
            start_room: "hall".into(),
            rooms: vec![RoomDef {
                id: "hall".into(),
                name: "Hall".into(),
                clue: None,
                left: None,
                right: None,
            }],
            ..CaseDef::default()
        };
        assert_eq!(case.room("hall").map(|r| r.name.as_str()), Some("Hall"));
        assert!(case.room("attic").is_none());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let text = r#"(
            title: "Mini",
            start_room: "hall",
            rooms: [(id: "hall", name: "Hall")],
        )"#;
        let case: CaseDef = ron::from_str(text).expect("parse minimal case");
        assert_eq!(case.intro, "");
        assert!(case.associations.is_empty());
        let hall = &case.rooms[0];
        assert!(hall.clue.is_none());
        assert!(hall.left.is_none() && hall.right.is_none());
    }
}
