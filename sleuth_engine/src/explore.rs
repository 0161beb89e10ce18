//! Exploration of the room layout.
//!
//! Navigation is a pure transition function ([`step`]) over the current room
//! and one [`Move`]. [`explore`] drives it from a [`PlayerInput`], narrating
//! through the [`View`] and dropping every clue it passes into a [`ClueSet`].

use anyhow::{Context, Result};
use log::{debug, info};
use thiserror::Error;

use crate::clue::ClueSet;
use crate::input::{InputEvent, PlayerInput};
use crate::room::{RoomGraph, RoomId, Side};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

/// One choice made at the exploration prompt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    End,
    Invalid,
}

impl Move {
    /// Interpret a line of player input by its first non-blank character.
    ///
    /// `l` goes left, `r` goes right and `s` stops exploring; anything else is invalid.
    pub fn parse(token: &str) -> Self {
        match token.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('l') => Move::Left,
            Some('r') => Move::Right,
            Some('s') => Move::End,
            _ => Move::Invalid,
        }
    }
}

/// Why a move left the player where they were.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("there is no way {0} from here")]
    NoPath(Side),
    #[error("that is not a choice")]
    Unrecognized,
}

/// Result of applying a [`Move`] to the current room.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(RoomId),
    Stayed(NavError),
    Ended,
}

/// Compute where `mv` takes the player standing in `current`.
pub fn step(graph: &RoomGraph, current: RoomId, mv: Move) -> Transition {
    let side = match mv {
        Move::Left => Side::Left,
        Move::Right => Side::Right,
        Move::End => return Transition::Ended,
        Move::Invalid => return Transition::Stayed(NavError::Unrecognized),
    };
    graph
        .child(current, side)
        .map_or(Transition::Stayed(NavError::NoPath(side)), Transition::Moved)
}

/// Exploration state: where the player stands and what they have found.
#[derive(Debug)]
pub struct Explorer<'g> {
    graph: &'g RoomGraph,
    current: RoomId,
    clues: ClueSet,
}

impl<'g> Explorer<'g> {
    /// Start at the layout's entry room with no clues.
    pub fn new(graph: &'g RoomGraph) -> Self {
        Self {
            graph,
            current: graph.root(),
            clues: ClueSet::new(),
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    pub fn into_clues(self) -> ClueSet {
        self.clues
    }

    /// Describe the current room and pick up its clue, if it has one.
    pub fn look_around(&mut self, view: &mut View) {
        let room = self.graph.room(self.current);
        view.push(ViewItem::RoomName(room.name().to_string()));
        match room.clue() {
            Some(clue) => {
                if self.clues.insert(clue) {
                    info!("clue collected in {}: \"{clue}\"", room.name());
                }
                view.push(ViewItem::ClueFound(clue.to_string()));
            },
            None => view.push(ViewItem::NoClue),
        }
    }

    /// List the ways out of the current room.
    pub fn show_options(&self, view: &mut View) {
        let room = self.graph.room(self.current);
        if room.is_dead_end() {
            debug!("{} is a dead end", room.name());
        }
        let name_of = |id: Option<RoomId>| id.map(|id| self.graph.room(id).name().to_string());
        view.push(ViewItem::MoveOptions {
            left: name_of(room.left()),
            right: name_of(room.right()),
        });
    }

    /// Apply a move, updating the current room when it leads somewhere.
    pub fn advance(&mut self, mv: Move) -> Transition {
        let transition = step(self.graph, self.current, mv);
        if let Transition::Moved(next) = transition {
            debug!(
                "moved {} -> {}",
                self.graph.room(self.current).name(),
                self.graph.room(next).name()
            );
            self.current = next;
        }
        transition
    }
}

/// Walk the layout under player direction until they choose to stop.
///
/// End of input counts as stopping; an interrupted read is treated as an
/// invalid choice and re-prompts.
///
/// # Errors
/// Propagates unrecoverable input failures.
pub fn explore(graph: &RoomGraph, input: &mut impl PlayerInput, view: &mut View) -> Result<ClueSet> {
    let mut explorer = Explorer::new(graph);
    let prompt = format!("{} ", "Choice:".prompt_style());
    loop {
        explorer.look_around(view);
        explorer.show_options(view);
        view.flush();

        let mv = match input.read_line(&prompt).context("while reading exploration choice")? {
            InputEvent::Line(line) => Move::parse(&line),
            InputEvent::Eof => Move::End,
            InputEvent::Interrupted => Move::Invalid,
        };

        match explorer.advance(mv) {
            Transition::Moved(_) => {},
            Transition::Stayed(err) => {
                info!("invalid navigation: {err}");
                view.push(ViewItem::InvalidMove(err.to_string()));
            },
            Transition::Ended => {
                view.push(ViewItem::ExplorationEnded);
                break;
            },
        }
    }
    view.flush();
    info!("exploration ended with {} clue(s)", explorer.clues().len());
    Ok(explorer.into_clues())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::room::RoomGraphBuilder;

    fn layout() -> (RoomGraph, RoomId, RoomId, RoomId) {
        let mut builder = RoomGraphBuilder::new();
        let hall = builder.add_room("Hall", Some("Old key"));
        let library = builder.add_room("Library", Some("Misplaced book"));
        let garden = builder.add_room("Garden", None);
        builder.link(hall, Side::Left, library).unwrap();
        builder.link(hall, Side::Right, garden).unwrap();
        (builder.build(hall).unwrap(), hall, library, garden)
    }

    #[test]
    fn parse_uses_first_letter() {
        assert_eq!(Move::parse("l"), Move::Left);
        assert_eq!(Move::parse("  Right"), Move::Right);
        assert_eq!(Move::parse("S"), Move::End);
        assert_eq!(Move::parse("x"), Move::Invalid);
        assert_eq!(Move::parse(""), Move::Invalid);
    }

    #[test]
    fn step_follows_existing_children() {
        let (graph, hall, library, garden) = layout();
        assert_eq!(step(&graph, hall, Move::Left), Transition::Moved(library));
        assert_eq!(step(&graph, hall, Move::Right), Transition::Moved(garden));
        assert_eq!(step(&graph, hall, Move::End), Transition::Ended);
    }

    #[test]
    fn step_into_missing_child_stays_put() {
        let (graph, _, library, _) = layout();
        assert_eq!(
            step(&graph, library, Move::Left),
            Transition::Stayed(NavError::NoPath(Side::Left))
        );
        assert_eq!(
            step(&graph, library, Move::Invalid),
            Transition::Stayed(NavError::Unrecognized)
        );
    }

    #[test]
    fn advance_only_moves_on_success() {
        let (graph, hall, library, _) = layout();
        let mut explorer = Explorer::new(&graph);
        assert_eq!(explorer.current(), hall);
        explorer.advance(Move::Left);
        assert_eq!(explorer.current(), library);
        explorer.advance(Move::Right);
        assert_eq!(explorer.current(), library);
    }

    #[test]
    fn revisiting_does_not_duplicate_clues() {
        let (graph, ..) = layout();
        let mut view = View::silent();
        let mut explorer = Explorer::new(&graph);
        explorer.look_around(&mut view);
        explorer.look_around(&mut view);
        assert_eq!(explorer.clues().len(), 1);
    }

    #[test]
    fn explore_collects_along_the_path() {
        let (graph, ..) = layout();
        let mut view = View::silent();
        let mut input = ScriptedInput::new(["l", "s"]);
        let clues = explore(&graph, &mut input, &mut view).unwrap();
        assert_eq!(clues.ordered(), vec!["Misplaced book", "Old key"]);
    }

    #[test]
    fn invalid_choice_reprompts_same_room() {
        let (graph, ..) = layout();
        let mut view = View::silent();
        let mut input = ScriptedInput::new(["q", "s"]);
        explore(&graph, &mut input, &mut view).unwrap();

        let rooms: Vec<&str> = view
            .history
            .iter()
            .filter_map(|item| match item {
                ViewItem::RoomName(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(rooms, vec!["Hall", "Hall"]);
        assert_eq!(view.history.iter().filter(|item| item.is_invalid_move()).count(), 1);
        assert_eq!(view.history.iter().filter(|item| item.is_move_options()).count(), 2);
    }

    #[test]
    fn end_of_input_ends_exploration() {
        let (graph, ..) = layout();
        let mut view = View::silent();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let clues = explore(&graph, &mut input, &mut view).unwrap();
        assert_eq!(clues.len(), 1);
        assert!(view.history.last().is_some_and(ViewItem::is_exploration_ended));
    }
}
