//! A full play-through: explore the mansion, then make an accusation.

use anyhow::{Context, Result};
use log::info;

use crate::association::AssociationTable;
use crate::clue::ClueSet;
use crate::explore::explore;
use crate::input::{InputEvent, PlayerInput};
use crate::loader::settings::Settings;
use crate::room::RoomGraph;
use crate::style::GameStyle;
use crate::verdict::{Judgement, judge_with_threshold};
use crate::view::{View, ViewItem};

/// Everything needed to play one case. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Case {
    pub title: String,
    pub intro: String,
    pub graph: RoomGraph,
    pub associations: AssociationTable,
    pub settings: Settings,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Nothing was collected, so no accusation was asked for.
    NoClues,
    /// Clues were collected but no suspect was named.
    NoSuspect { collected: Vec<String> },
    Judged(Judgement),
}

/// Run exploration followed by the accusation.
///
/// # Errors
/// Propagates unrecoverable input failures.
pub fn run_session(case: &Case, input: &mut impl PlayerInput, view: &mut View) -> Result<SessionOutcome> {
    view.push(ViewItem::Banner {
        title: case.title.clone(),
        intro: case.intro.clone(),
    });
    info!("session started: {}", case.title);

    let clues = explore(&case.graph, input, view)?;
    let outcome = accuse(&clues, &case.associations, case.settings.sustain_threshold, input, view)?;
    view.flush();
    Ok(outcome)
}

/// Show the collected clues, ask who did it, and judge the answer.
///
/// With no clues there is no prompt at all. A blank answer or end of input
/// skips the verdict.
///
/// # Errors
/// Propagates unrecoverable input failures.
pub fn accuse(
    clues: &ClueSet,
    table: &AssociationTable,
    threshold: usize,
    input: &mut impl PlayerInput,
    view: &mut View,
) -> Result<SessionOutcome> {
    if clues.is_empty() {
        view.push(ViewItem::NoBasisToAccuse);
        info!("no clues collected; accusation skipped");
        return Ok(SessionOutcome::NoClues);
    }

    let collected: Vec<String> = clues.iter().map(str::to_string).collect();
    view.push(ViewItem::CollectedClues(collected.clone()));
    let suspects: Vec<String> = table.suspects().into_iter().map(str::to_string).collect();
    if !suspects.is_empty() {
        view.push(ViewItem::Suspects(suspects.clone()));
    }
    view.flush();

    input.set_completions(&suspects);
    let prompt = format!("\n{} ", "Who do you accuse?".prompt_style());
    let answer = match input.read_line(&prompt).context("while reading accusation")? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };
    // only the line terminator is stripped; the name itself is matched verbatim
    if answer.trim().is_empty() {
        view.push(ViewItem::NoSuspectGiven);
        info!("no suspect named; verdict skipped");
        return Ok(SessionOutcome::NoSuspect { collected });
    }

    let judgement = judge_with_threshold(clues, table, &answer, threshold);
    info!(
        "accused {} with {} matching clue(s): {}",
        judgement.accused, judgement.match_count, judgement.verdict
    );
    view.push(ViewItem::MatchCount {
        suspect: judgement.accused.clone(),
        count: judgement.match_count,
    });
    view.push(ViewItem::Verdict {
        suspect: judgement.accused.clone(),
        verdict: judgement.verdict,
    });
    Ok(SessionOutcome::Judged(judgement))
}
