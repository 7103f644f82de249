// ============================================================
// Layer 2 — TrainUseCase (interactive session)
// ============================================================
// Drives one interactive training run on the terminal:
//
//   Step 1: Load saved parameters          (Layer 6 - infra)
//   Step 2: Apply CLI overrides            (Layer 2)
//   Step 3: Init the collaborators         (Layers 4 + 5)
//   Step 4: Start the session              (Layer 2 - session)
//   Step 5: Command loop over stdin        (this file)
//
// Each console command maps 1:1 to a state-machine event:
//   enter / n → next case      s → show solutions
//   o → change options         r → reset
//   q → quit

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::application::session::TrainerSession;
use crate::application::state::AppState;
use crate::cube::algebra::SequenceAlgebra;
use crate::data::loader::CsvCaseLoader;
use crate::domain::case::Case;
use crate::domain::params::{ParamsUpdate, TrainingParameters, KNOWN_RZPS};
use crate::infra::settings::SettingsStore;

// ─── Session Configuration ───────────────────────────────────────────────────
/// Everything the interactive session needs from the outside.
#[derive(Debug, Clone)]
pub struct TrainSessionConfig {
    /// Directory holding the `<rzp>_db_input.csv` dataset files
    pub data_dir: String,

    /// Directory where the parameter settings file lives
    pub settings_dir: String,

    /// Parameter overrides from the command line (only the
    /// flags the user actually passed)
    pub overrides: ParamsUpdate,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainSessionConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainSessionConfig) -> Self {
        Self { config }
    }

    /// Run the interactive session until the user quits.
    pub fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        self.run(&mut lines)
    }

    /// The actual loop, driven by any line source so the command
    /// handling stays testable without a terminal.
    fn run<I>(&self, lines: &mut I) -> Result<()>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        // ── Steps 1-2: saved parameters + CLI overrides ──────────────────────
        let store = SettingsStore::new(&self.config.settings_dir)?;
        let params = store
            .load_or_default()
            .apply(self.config.overrides.clone())
            .context("invalid parameter overrides")?;

        // ── Step 3: collaborators ────────────────────────────────────────────
        let source = CsvCaseLoader::new(&self.config.data_dir);
        let algebra = SequenceAlgebra::init()?;

        // ── Step 4: session ──────────────────────────────────────────────────
        let mut session = TrainerSession::new(source, algebra, rand::thread_rng(), params);
        session.finish_init()?;
        session.start_training()?;
        self.report_after_load(session.state());

        // ── Step 5: command loop ─────────────────────────────────────────────
        loop {
            print!("\n[enter] next  [s] solutions  [o] options  [r] reset  [q] quit > ");
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break, // stdin closed
            };

            match line.trim() {
                "" | "n" => match session.next_case() {
                    Ok(Some(selection)) => {
                        println!("\nScramble: {}", selection.scramble);
                    }
                    Ok(None) => {
                        println!("\nNo cases match your filters — loosen them under [o].");
                    }
                    Err(err) => println!("Cannot pick a case right now: {err}"),
                },
                "s" => match session.reveal() {
                    Ok(()) => {
                        if let Some(active) = session.state().current_training() {
                            let max = session.state().params().max_display;
                            print_case(&active.case, max);
                        }
                    }
                    Err(err) => println!("Nothing to reveal yet: {err}"),
                },
                "o" => match session.change_options() {
                    Ok(()) => {
                        let update = prompt_params(session.state().params(), lines)?;
                        if let Err(err) = session.update_params(update) {
                            println!("Rejected: {err}");
                        }
                        store.save(session.state().params())?;
                        session.start_training()?;
                        self.report_after_load(session.state());
                    }
                    Err(err) => println!("Reveal the solution first: {err}"),
                },
                "r" => {
                    session.reset()?;
                    session.start_training()?;
                    self.report_after_load(session.state());
                }
                "q" => break,
                other => println!("Unknown command '{other}'"),
            }
        }

        tracing::info!("training session ended");
        Ok(())
    }

    /// Print where the load landed: candidate count, or the load
    /// error with its retry hint.
    fn report_after_load(&self, state: &AppState) {
        match state {
            AppState::Idle { cases, .. } if cases.is_empty() => {
                println!("No cases match your filters — loosen them under [o].");
            }
            AppState::Idle { cases, params } => {
                println!(
                    "{} candidate cases loaded for rzp '{}'. Press enter for a scramble.",
                    cases.len(),
                    params.rzp,
                );
            }
            AppState::Options {
                load_error: Some(message),
                ..
            } => {
                println!("Loading failed: {message}");
                println!("Fix the dataset or pick another rzp under [o], then retry.");
            }
            _ => {}
        }
    }
}

/// Show a case and up to `max_display` of its solutions.
fn print_case(case: &Case, max_display: u32) {
    println!(
        "\nCase {} — rzp {}, arm {}, {} pairs{}{}",
        case.id,
        case.rzp,
        case.arm,
        case.pairs,
        case.tetrad
            .as_deref()
            .map(|t| format!(", tetrad {t}"))
            .unwrap_or_default(),
        case.corners
            .as_deref()
            .map(|c| format!(", corners {c}"))
            .unwrap_or_default(),
    );
    for solution in case.solutions.iter().take(max_display as usize) {
        println!(
            "  {:<24} ({} moves, trigger {}{})",
            solution.moves,
            solution.length,
            solution.trigger,
            if solution.eo_breaking { ", EO-breaking" } else { "" },
        );
    }
    let hidden = case.solutions.len().saturating_sub(max_display as usize);
    if hidden > 0 {
        println!("  … and {hidden} more");
    }
}

/// Interactive parameter editing: show the current value, keep
/// it on an empty answer.
fn prompt_params<I>(current: &TrainingParameters, lines: &mut I) -> Result<ParamsUpdate>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("Known rzp tags: {}", KNOWN_RZPS.join(", "));
    Ok(ParamsUpdate {
        rzp:         prompt_field("rzp", &current.rzp, lines)?,
        max_length:  prompt_parsed("max length", current.max_length, lines)?,
        min_trigger: prompt_parsed("min trigger", current.min_trigger, lines)?,
        max_trigger: prompt_parsed("max trigger", current.max_trigger, lines)?,
        max_display: prompt_parsed("max solutions shown", current.max_display, lines)?,
    })
}

fn prompt_field<I>(label: &str, current: &str, lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label} [{current}]: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let answer = line?.trim().to_string();
            Ok(if answer.is_empty() { None } else { Some(answer) })
        }
        None => Ok(None),
    }
}

fn prompt_parsed<I>(label: &str, current: u32, lines: &mut I) -> Result<Option<u32>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        match prompt_field(label, &current.to_string(), lines)? {
            None => return Ok(None),
            Some(answer) => match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("'{answer}' is not a number"),
            },
        }
    }
}
