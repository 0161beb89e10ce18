//! View module.
//!
//! Handlers never print directly. They push [`ViewItem`]s describing what
//! happened, and [`View::flush`] renders the batch in the order it was pushed.
//! Everything flushed is also kept in `history` so sessions can be inspected
//! after the fact.
use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::{GameStyle, indented_block, normal_block};
use crate::verdict::Verdict;

const ICON_CLUE: &str = "\u{1F50E}"; // magnifying glass
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_GAVEL: &str = "\u{2696}"; // scales

/// Something to tell the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Banner {
        title: String,
        intro: String,
    },
    RoomName(String),
    ClueFound(String),
    NoClue,
    /// Names of the rooms to the left and right, if any. Ending is always offered.
    MoveOptions {
        left: Option<String>,
        right: Option<String>,
    },
    InvalidMove(String),
    ExplorationEnded,
    CollectedClues(Vec<String>),
    NoBasisToAccuse,
    Suspects(Vec<String>),
    NoSuspectGiven,
    MatchCount {
        suspect: String,
        count: usize,
    },
    Verdict {
        suspect: String,
        verdict: Verdict,
    },
}

/// Collects `ViewItem`s and renders them in batches.
#[derive(Debug, Clone)]
pub struct View {
    pub items: Vec<ViewItem>,
    pub history: Vec<ViewItem>,
    echo: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// A view that prints to stdout.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            history: Vec::new(),
            echo: true,
        }
    }

    /// A view that only records into `history`.
    pub fn silent() -> Self {
        Self {
            echo: false,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render everything pushed since the last flush.
    pub fn flush(&mut self) {
        if self.echo {
            for item in &self.items {
                Self::render(item);
            }
        }
        self.history.append(&mut self.items);
    }

    fn render(item: &ViewItem) {
        match item {
            ViewItem::Banner { title, intro } => {
                println!("{:^width$}\n", title.title_style(), width = termwidth().min(84));
                if !intro.is_empty() {
                    println!("{}\n", fill(intro, normal_block()).description_style());
                }
            },
            ViewItem::RoomName(name) => {
                println!("\nYou are in the {}", name.room_style());
            },
            ViewItem::ClueFound(clue) => {
                let line = format!("{ICON_CLUE} You found a clue: \"{clue}\"");
                println!("{}", fill(&line, normal_block()).clue_style());
            },
            ViewItem::NoClue => println!("{}", "Nothing of interest here.".italic()),
            ViewItem::MoveOptions { left, right } => {
                println!("\n{}", "exits".section_style());
                if let Some(left) = left {
                    println!("   ({}) go left to the {}", "l".option_key_style(), left.room_style());
                }
                if let Some(right) = right {
                    println!("   ({}) go right to the {}", "r".option_key_style(), right.room_style());
                }
                println!("   ({}) stop exploring", "s".option_key_style());
            },
            ViewItem::InvalidMove(reason) => {
                let line = format!("{ICON_ERROR:<4}Invalid choice: {reason}. Try again.");
                println!("{}", line.error_style());
            },
            ViewItem::ExplorationEnded => println!("\n{}", "Exploration finished.".italic()),
            ViewItem::CollectedClues(clues) => {
                println!("\n{}", "collected clues".section_style());
                for clue in clues {
                    println!("{}", fill(&format!("- {clue}"), indented_block()).clue_style());
                }
            },
            ViewItem::NoBasisToAccuse => {
                println!("{}", "No clues were collected. There is no basis to accuse anyone.".italic());
            },
            ViewItem::Suspects(names) => {
                let listed: Vec<String> = names.iter().map(|n| n.suspect_style().to_string()).collect();
                println!("\nKnown suspects: {}", listed.join(", "));
            },
            ViewItem::NoSuspectGiven => println!("{}", "No suspect was named.".italic()),
            ViewItem::MatchCount { suspect, count } => {
                println!("\nClues pointing to {}: {count}", suspect.suspect_style());
            },
            ViewItem::Verdict { suspect, verdict } => {
                let text = match verdict {
                    Verdict::Sustained => {
                        format!("Verdict: the accusation holds! {suspect} is most likely the culprit.").sustained_style()
                    },
                    Verdict::Insufficient => {
                        format!("Verdict: not enough evidence. The case against {suspect} falls apart.")
                            .insufficient_style()
                    },
                };
                println!("{ICON_GAVEL:<4}{text}");
            },
        }
    }
}
