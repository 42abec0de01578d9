//! Runs the fixed step sequence, owns the Session Record, and saves it on
//! every way out.

use std::{io::Write, path::PathBuf};

use tracing::{info, warn};

use crate::{
    Error,
    advice::WELCOME,
    input::LineSource,
    persist::SessionPersister,
    plan::render_plan,
    prompt::{Halt, Prompter},
    record::SessionRecord,
    state::{Step, WizardPhase},
    steps::run_step,
};

const BANNER_WIDTH: usize = 70;

#[derive(Debug, Clone)]
pub struct WizardOptions {
    /// Print advisory blocks after answers.
    pub show_advice: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self { show_advice: true }
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every step ran and the plan was rendered.
    Completed,
    /// The operator chose to stop after this step.
    Declined { after: Step },
    /// Ctrl-C while this step (or the question after it) was waiting.
    Interrupted { during: Step },
    /// Input ended while this step was waiting.
    InputClosed { during: Step },
    /// Writing output failed during this step.
    Failed { step: Step, error: Error },
}

/// What a finished run leaves behind.
#[derive(Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub record: SessionRecord,
    /// `None` when the snapshot could not be written.
    pub saved_to: Option<PathBuf>,
}

pub struct Sequencer<S, W> {
    prompter: Prompter<S, W>,
    record: SessionRecord,
    persister: SessionPersister,
    options: WizardOptions,
    phase: WizardPhase,
}

impl<S: LineSource, W: Write> Sequencer<S, W> {
    pub fn new(input: S, out: W, persister: SessionPersister, options: WizardOptions) -> Self {
        Self {
            prompter: Prompter::new(input, out),
            record: SessionRecord::new(),
            persister,
            options,
            phase: WizardPhase::NotStarted,
        }
    }

    /// Continue from a loaded record instead of a fresh one.
    #[must_use]
    pub fn with_record(mut self, record: SessionRecord) -> Self {
        self.record = record;
        self
    }

    /// Run the remaining steps, render the plan if all of them finish, and
    /// save the record whatever happens.
    pub async fn run(mut self) -> RunSummary {
        let outcome = self.drive().await;
        info!(outcome = ?outcome, current_step = self.record.current_step, "wizard stopped");

        match &outcome {
            Outcome::Completed => {},
            Outcome::Declined { .. } => self.say(&[
                "\n⏸️ Feel free to review the information above.",
                "Run the assistant again when you're ready to continue!",
            ]),
            Outcome::Interrupted { .. } => {
                self.say(&["\n\n⏸️ Assistant paused. Your progress has been saved."])
            },
            Outcome::InputClosed { .. } => {
                self.say(&["\n\n⏸️ Input ended. Your progress has been saved."])
            },
            Outcome::Failed { step, error } => {
                let line = format!("\n❌ Error in step {step}: {error}");
                self.say(&[line.as_str()]);
            },
        }

        let saved_to = self.save();
        self.phase = WizardPhase::Saved;

        match &outcome {
            Outcome::Completed => self.say(&[
                "\n🎉 Congratulations! You have a complete backend development plan.",
                "Check the framework-specific guides in backend-guide/frameworks/ to start coding!",
            ]),
            Outcome::Failed { .. } => {
                self.say(&["Don't worry, you can restart the assistant anytime!"])
            },
            _ => {},
        }

        RunSummary {
            outcome,
            record: self.record,
            saved_to,
        }
    }

    async fn drive(&mut self) -> Outcome {
        self.phase = WizardPhase::starting_at(self.record.current_step);
        let first = match self.phase {
            WizardPhase::Running(step) => step,
            _ => Step::LAST,
        };
        if let Err(e) = self.welcome() {
            return Outcome::Failed {
                step: first,
                error: e.into(),
            };
        }

        while let WizardPhase::Running(step) = self.phase {
            info!(step = step.number(), title = step.title(), "step started");
            if let Err(halt) = run_step(
                step,
                &mut self.prompter,
                &mut self.record,
                self.options.show_advice,
            )
            .await
            {
                return halted(step, halt);
            }
            self.record.current_step = step.number() + 1;
            self.phase = self.phase.advance();

            if !step.is_last() {
                match self.prompter.confirm_continue().await {
                    Ok(true) => {},
                    Ok(false) => return Outcome::Declined { after: step },
                    Err(halt) => return halted(step, halt),
                }
            }
        }

        if let Err(e) = render_plan(&self.record, self.prompter.out()) {
            return Outcome::Failed {
                step: Step::LAST,
                error: e.into(),
            };
        }
        Outcome::Completed
    }

    fn welcome(&mut self) -> std::io::Result<()> {
        let out = self.prompter.out();
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(out, "\n{banner}")?;
        writeln!(out, "🏥 SmartHealthQuote Backend Development Assistant")?;
        writeln!(out, "{banner}\n")?;
        for line in WELCOME {
            writeln!(out, "{line}")?;
        }
        if self.record.current_step > Step::FIRST.number() {
            writeln!(
                out,
                "\nResuming your saved session at step {}.",
                self.record.current_step
            )?;
        }
        writeln!(out, "\n{}", "-".repeat(BANNER_WIDTH))?;
        Ok(())
    }

    /// Persist the record; failures become a warning, never an error.
    fn save(&mut self) -> Option<PathBuf> {
        match self.persister.save(&self.record) {
            Ok(path) => {
                info!(path = %path.display(), "session saved");
                let line = format!("\n💾 Session saved to {}", path.display());
                self.say(&[line.as_str()]);
                Some(path)
            },
            Err(e) => {
                warn!(path = %self.persister.path().display(), error = %e, "could not save session");
                let line = format!("⚠️ Could not save session: {e}");
                self.say(&[line.as_str()]);
                None
            },
        }
    }

    /// Best-effort status output once the steps are over.
    fn say(&mut self, lines: &[&str]) {
        let out = self.prompter.out();
        for line in lines {
            if let Err(e) = writeln!(out, "{line}") {
                warn!(error = %e, "failed to write status line");
                return;
            }
        }
        let _ = out.flush();
    }
}

fn halted(step: Step, halt: Halt) -> Outcome {
    match halt {
        Halt::Interrupted => Outcome::Interrupted { during: step },
        Halt::InputClosed => Outcome::InputClosed { during: step },
        Halt::Fault(error) => Outcome::Failed { step, error },
    }
}
