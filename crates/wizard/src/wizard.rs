//! Terminal entry point wiring stdin, stdout and the configured snapshot
//! path into a [`Sequencer`].

use {stackplan_config::StackplanConfig, tracing::info};

use crate::{
    Context, Result,
    input::TerminalInput,
    persist::SessionPersister,
    sequencer::{RunSummary, Sequencer, WizardOptions},
};

/// Run the interactive planning wizard in the terminal.
///
/// With `resume`, a saved snapshot at the configured path is picked up at
/// its `current_step`; without one the run starts fresh.
pub async fn run_wizard(config: &StackplanConfig, resume: bool) -> Result<RunSummary> {
    let persister = SessionPersister::new(&config.session.path);
    let options = WizardOptions {
        show_advice: config.wizard.show_advice,
    };

    let saved = if resume {
        persister.load()?
    } else {
        None
    };

    let input = TerminalInput::spawn().context("start stdin reader")?;
    let mut sequencer = Sequencer::new(input, std::io::stdout(), persister, options);
    if let Some(record) = saved {
        info!(step = record.current_step, "resuming saved session");
        sequencer = sequencer.with_record(record);
    }

    Ok(sequencer.run().await)
}
