#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SLEUTH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod association;
pub mod clue;
pub mod data_paths;
pub mod explore;
pub mod input;
pub mod loader;
pub mod room;
pub mod session;
pub mod style;
pub mod verdict;
pub mod view;

// Re-exports for convenience
pub use association::AssociationTable;
pub use clue::ClueSet;
pub use explore::{Move, Transition, explore, step};
pub use input::{InputEvent, InputManager, PlayerInput, ScriptedInput};
pub use loader::load_case;
pub use room::{Room, RoomGraph, RoomGraphBuilder, RoomId, Side};
pub use session::{Case, SessionOutcome, run_session};
pub use verdict::{Judgement, Verdict, judge};
pub use view::{View, ViewItem};
