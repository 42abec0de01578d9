use std::io::Write;

use {
    anyhow::{Result, bail},
    stackplan_config::StackplanConfig,
    stackplan_wizard::{SessionPersister, render_plan},
};

/// Render the plan from the snapshot at the configured path.
pub fn print_saved_plan(config: &StackplanConfig) -> Result<()> {
    let stdout = std::io::stdout();
    write_saved_plan(config, &mut stdout.lock())
}

fn write_saved_plan(config: &StackplanConfig, out: &mut impl Write) -> Result<()> {
    let persister = SessionPersister::new(&config.session.path);
    let Some(record) = persister.load()? else {
        bail!(
            "no saved session at {}; run `stackplan` first",
            persister.path().display()
        );
    };

    if !record.is_complete() {
        writeln!(
            out,
            "Session stopped before step {}; unanswered fields show as not specified.",
            record.current_step
        )?;
    }
    render_plan(&record, out)?;
    out.flush()?;
    Ok(())
}
