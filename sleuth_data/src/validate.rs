use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `CaseDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    SharedChild { id: String, first_parent: String, second_parent: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::SharedChild {
                id,
                first_parent,
                second_parent,
            } => {
                write!(
                    f,
                    "room '{id}' is a child of both '{first_parent}' and '{second_parent}'"
                )
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and the tree shape of a `CaseDef`.
///
/// ```
/// use sleuth_data::{AssociationDef, CaseDef, RoomDef, validate_case};
///
/// let case = CaseDef {
///     title: "Demo".into(),
///     intro: "Intro".into(),
///     start_room: "hall".into(),
///     rooms: vec![
///         RoomDef {
///             id: "hall".into(),
///             name: "Hall".into(),
///             clue: Some("Old key".into()),
///             left: Some("study".into()),
///             right: None,
///         },
///         RoomDef {
///             id: "study".into(),
///             name: "Study".into(),
///             clue: None,
///             left: None,
///             right: None,
///         },
///     ],
///     associations: vec![AssociationDef {
///         clue: "Old key".into(),
///         suspect: "Mr. Black".into(),
///     }],
/// };
/// assert!(validate_case(&case).is_empty());
/// ```
pub fn validate_case(case: &CaseDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    track_ids(
        "room",
        case.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );

    if case.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "case start room missing".to_string(),
        });
    } else {
        check_ref("room", &case.start_room, &rooms, "case start room".to_string(), &mut errors);
    }

    // child id -> first parent that claimed it
    let mut parents: HashMap<&str, &str> = HashMap::new();
    for room in &case.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' has a blank name", room.id),
            });
        }
        for (side, child) in [("left", &room.left), ("right", &room.right)] {
            let Some(child) = child else { continue };
            check_ref(
                "room",
                child,
                &rooms,
                format!("room '{}' {side} child", room.id),
                &mut errors,
            );
            if child == &room.id {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' lists itself as its {side} child", room.id),
                });
                continue;
            }
            if child == &case.start_room {
                errors.push(ValidationError::InvalidValue {
                    context: format!("start room '{child}' is the {side} child of '{}'", room.id),
                });
            }
            if let Some(first) = parents.insert(child.as_str(), room.id.as_str()) {
                errors.push(ValidationError::SharedChild {
                    id: child.clone(),
                    first_parent: first.to_string(),
                    second_parent: room.id.clone(),
                });
            }
        }
    }

    for (idx, assoc) in case.associations.iter().enumerate() {
        if assoc.clue.is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("association #{idx} has an empty clue"),
            });
        }
        if assoc.suspect.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("association for clue '{}' has a blank suspect", assoc.clue),
            });
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, left: Option<&str>, right: Option<&str>) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: format!("Room {id}"),
            clue: None,
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        }
    }

    fn base_case() -> CaseDef {
        CaseDef {
            title: "Demo".into(),
            intro: "Intro".into(),
            start_room: "hall".into(),
            rooms: vec![room("hall", Some("den"), Some("kitchen")), room("den", None, None), room("kitchen", None, None)],
            associations: Vec::new(),
        }
    }

    #[test]
    fn valid_case_has_no_errors() {
        assert!(validate_case(&base_case()).is_empty());
    }

    #[test]
    fn duplicate_room_ids_are_reported() {
        let mut case = base_case();
        case.rooms.push(room("den", None, None));
        let errors = validate_case(&case);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "room",
            id: "den".into()
        }));
    }

    #[test]
    fn missing_start_room_is_reported() {
        let mut case = base_case();
        case.start_room = "attic".into();
        let errors = validate_case(&case);
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::MissingReference { id, .. }] if id == "attic"
        ));
    }

    #[test]
    fn blank_start_room_is_invalid() {
        let mut case = base_case();
        case.start_room = "  ".into();
        let errors = validate_case(&case);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidValue { context } if context.contains("start room")))
        );
    }

    #[test]
    fn dangling_child_reference_is_reported() {
        let mut case = base_case();
        case.rooms[1].left = Some("cellar".into());
        let errors = validate_case(&case);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { id, context, .. } if id == "cellar" && context.contains("'den' left")
        )));
    }

    #[test]
    fn shared_child_is_reported() {
        let mut case = base_case();
        case.rooms[2].left = Some("den".into());
        let errors = validate_case(&case);
        assert!(errors.contains(&ValidationError::SharedChild {
            id: "den".into(),
            first_parent: "hall".into(),
            second_parent: "kitchen".into(),
        }));
    }

    #[test]
    fn self_link_and_root_as_child_are_invalid() {
        let mut case = base_case();
        case.rooms[1].left = Some("den".into());
        case.rooms[2].right = Some("hall".into());
        let errors = validate_case(&case);
        assert!(errors.iter().any(|e| e.to_string().contains("lists itself")));
        assert!(errors.iter().any(|e| e.to_string().contains("start room 'hall'")));
    }

    #[test]
    fn blank_association_values_are_invalid() {
        let mut case = base_case();
        case.associations.push(AssociationDef {
            clue: String::new(),
            suspect: "Mr. Black".into(),
        });
        case.associations.push(AssociationDef {
            clue: "Old key".into(),
            suspect: " ".into(),
        });
        assert_eq!(validate_case(&case).len(), 2);
    }

    #[test]
    fn display_messages_name_the_offender() {
        let err = ValidationError::MissingReference {
            kind: "room",
            id: "cellar".into(),
            context: "room 'den' left child".into(),
        };
        assert_eq!(err.to_string(), "missing room 'cellar' (room 'den' left child)");
    }
}
