use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
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
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Every problem found is reported; an empty vector means the dataset is safe to build.
///
/// ```
/// use wayfare_data::{ItemDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     start_room: "a".into(),
///     rooms: vec![
///         RoomDef::new("a", "Room A").with_exit("north", "b"),
///         RoomDef::new("b", "Room B").with_exit("south", "a").with_item("torch"),
///     ],
///     items: vec![ItemDef::new("torch", "torch", false, true)],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world has no rooms".to_string(),
        });
    }

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );

    if world.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start room missing".to_string(),
        });
    } else {
        check_ref("room", &world.start_room, &rooms, "start room".to_string(), &mut errors);
    }

    for room in &world.rooms {
        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has an exit with an empty direction", room.id),
                });
            }
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
        for item in &room.items {
            check_ref(
                "item",
                item,
                &items,
                format!("room '{}' contents", room.id),
                &mut errors,
            );
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(
    kind: &'static str,
    id: &str,
    known: &HashSet<&str>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
