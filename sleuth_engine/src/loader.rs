//! Loader utilities for building a playable [`Case`] from data files.
//!
//! The room layout and clue associations come from the RON case file;
//! engine tuning comes from `settings.toml`.

pub mod settings;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use log::{info, warn};
use sleuth_data::{CaseDef, validate_case};

use crate::association::AssociationTable;
use crate::clue::ClueSet;
use crate::data_paths::data_path;
use crate::room::{RoomGraph, RoomGraphBuilder, RoomId, Side};
use crate::session::Case;
use settings::{Settings, load_settings};

/// Load the case from the default data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or an invalid layout.
pub fn load_case() -> Result<Case> {
    load_case_from(&data_path("case.ron"), &data_path("settings.toml"))
}

/// Load a case from explicit paths. A missing settings file is not an error.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or an invalid layout.
pub fn load_case_from(case_path: &Path, settings_path: &Path) -> Result<Case> {
    let def = load_case_def(case_path).context("while loading case file")?;
    let settings = load_settings(settings_path);
    build_case(&def, settings)
}

/// Read and parse a RON case file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_case_def(path: &Path) -> Result<CaseDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading case from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing case RON from '{}'", path.display()))
}

/// Validate a case definition and turn it into runtime structures.
///
/// # Errors
/// Returns an error listing every validation problem, or a wiring failure.
pub fn build_case(def: &CaseDef, settings: Settings) -> Result<Case> {
    validate_case_def(def)?;
    let graph = build_room_graph(def).context("while building room layout")?;
    let associations =
        build_association_table(def, settings.bucket_count).context("while building association table")?;
    info!("{} rooms added to the layout", graph.len());
    info!("{} clue associations loaded", associations.len());
    if let Some(start) = def.room(&def.start_room) {
        info!("exploration starts in the {}", start.name);
    }
    warn_unplaced_clues(&graph, &associations);
    Ok(Case {
        title: def.title.clone(),
        intro: def.intro.clone(),
        graph,
        associations,
        settings,
    })
}

/// Fail with a combined message if the case definition has any problems.
///
/// # Errors
/// Returns every `ValidationError` joined into one error.
pub fn validate_case_def(def: &CaseDef) -> Result<()> {
    let errors = validate_case(def);
    if errors.is_empty() {
        return Ok(());
    }
    let summary = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
    bail!("case '{}' failed validation: {summary}", def.title)
}

/// Assemble the room tree described by `def`.
///
/// # Errors
/// - on a child or start room id that does not exist
/// - on any wiring that would break the tree shape
pub fn build_room_graph(def: &CaseDef) -> Result<RoomGraph> {
    let mut builder = RoomGraphBuilder::new();
    let mut symbols: HashMap<&str, RoomId> = HashMap::new();
    for room in &def.rooms {
        let id = builder.add_room(room.name.clone(), room.clue.as_deref());
        if symbols.insert(room.id.as_str(), id).is_some() {
            bail!("duplicate room id '{}'", room.id);
        }
    }

    let lookup = |token: &str| {
        symbols
            .get(token)
            .copied()
            .ok_or_else(|| anyhow!("room '{token}' not found in case file"))
    };

    for room in &def.rooms {
        let parent = lookup(&room.id)?;
        for (side, child) in [(Side::Left, &room.left), (Side::Right, &room.right)] {
            if let Some(child) = child {
                let child_id = lookup(child)?;
                builder
                    .link(parent, side, child_id)
                    .with_context(|| format!("linking '{}' {side} to '{child}'", room.id))?;
            }
        }
    }

    let root = lookup(&def.start_room).context("resolving start room")?;
    let graph = builder.build(root)?;

    let reachable = graph.reachable_from_root().len();
    if reachable < graph.len() {
        warn!(
            "{} room(s) cannot be reached from '{}'",
            graph.len() - reachable,
            def.start_room
        );
    }
    Ok(graph)
}

/// Fill an association table with every clue binding in `def`, in file order.
///
/// # Errors
/// Returns an error if `bucket_count` is zero.
pub fn build_association_table(def: &CaseDef, bucket_count: usize) -> Result<AssociationTable> {
    let mut table = AssociationTable::with_buckets(bucket_count)?;
    for assoc in &def.associations {
        table.insert_or_update(&assoc.clue, &assoc.suspect);
    }
    Ok(table)
}

/// Warn about associations whose clue no reachable room holds. Returns how many there are.
pub fn warn_unplaced_clues(graph: &RoomGraph, table: &AssociationTable) -> usize {
    let mut placed = ClueSet::new();
    for id in graph.reachable_from_root() {
        if let Some(clue) = graph.clue(id) {
            placed.insert(clue);
        }
    }
    let mut unplaced = 0;
    for (clue, suspect) in table.iter() {
        if !placed.contains(clue) {
            warn!("clue \"{clue}\" (pointing to {suspect}) is not held by any reachable room");
            unplaced += 1;
        }
    }
    unplaced
}
