#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Sleuth **
//! Mansion mystery: explore, collect clues, accuse.

use sleuth_engine::{InputManager, SessionOutcome, View, load_case, run_session};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading case...");
    let case = load_case().context("while loading case")?;
    info!("Case '{}' loaded successfully.", case.title);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    let mut input = InputManager::new();
    let mut view = View::new();
    let outcome = run_session(&case, &mut input, &mut view)?;
    match outcome {
        SessionOutcome::NoClues => info!("Session over: no clues collected."),
        SessionOutcome::NoSuspect { collected } => {
            info!("Session over: {} clue(s), nobody accused.", collected.len());
        },
        SessionOutcome::Judged(judgement) => info!("Session over: {} -> {}", judgement.accused, judgement.verdict),
    }
    Ok(())
}
