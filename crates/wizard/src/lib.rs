//! Interactive backend planning wizard.
//!
//! Flow: welcome → eight question steps (with a continue check between
//! each) → implementation plan → snapshot saved.

pub mod advice;
pub mod choice;
pub mod error;
pub mod input;
pub mod persist;
pub mod plan;
pub mod prompt;
pub mod record;
pub mod sequencer;
pub mod state;
pub mod steps;
pub mod wizard;

pub use {
    error::{Context, Error, Result},
    input::{Input, LineSource, ScriptedInput, TerminalInput},
    persist::SessionPersister,
    plan::{render_next_steps, render_plan},
    prompt::{Halt, Prompter, Question},
    record::SessionRecord,
    sequencer::{Outcome, RunSummary, Sequencer, WizardOptions},
    state::{Step, WizardPhase},
    wizard::run_wizard,
};
