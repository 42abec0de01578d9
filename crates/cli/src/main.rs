mod config_commands;
mod plan_commands;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    stackplan_config::StackplanConfig,
    tracing::{debug, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "stackplan", about = "stackplan — interactive backend planning assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file to use instead of the standard search locations.
    #[arg(long, global = true, env = "STACKPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Snapshot file (overrides config value).
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Continue from the saved snapshot instead of starting over.
    #[arg(long, global = true, default_value_t = false)]
    resume: bool,

    /// Skip the advisory blocks printed after answers.
    #[arg(long, global = true, default_value_t = false)]
    no_advice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the planning wizard (default when no subcommand is provided).
    Run,
    /// Print the plan recorded in the saved snapshot.
    Plan,
    /// Configuration inspection.
    Config {
        #[command(subcommand)]
        action: config_commands::ConfigAction,
    },
}

/// Initialise tracing. Logs go to stderr so they never interleave with the
/// wizard's own output on stdout.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Config file (explicit or discovered), then environment, then flags.
fn effective_config(cli: &Cli) -> anyhow::Result<StackplanConfig> {
    let config = match &cli.config {
        Some(path) => stackplan_config::load_config(path)?,
        None => stackplan_config::discover_and_load(),
    };
    let mut config = stackplan_config::apply_env_overrides(config);

    if let Some(path) = &cli.session_file {
        config.session.path = path.clone();
    }
    if cli.no_advice {
        config.wizard.show_advice = false;
    }
    debug!(session = %config.session.path.display(), "effective config");
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "stackplan starting");

    let config = effective_config(&cli)?;

    match cli.command {
        None | Some(Commands::Run) => {
            let summary = stackplan_wizard::run_wizard(&config, cli.resume).await?;
            info!(
                outcome = ?summary.outcome,
                saved = summary.saved_to.is_some(),
                "wizard finished"
            );
            Ok(())
        },
        Some(Commands::Plan) => plan_commands::print_saved_plan(&config),
        Some(Commands::Config { action }) => config_commands::handle_config(action, &config),
    }
}
