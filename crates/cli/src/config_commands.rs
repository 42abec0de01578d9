use {anyhow::Result, clap::Subcommand, stackplan_config::StackplanConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML.
    Show,
    /// Print where the user-global config file is looked up.
    Path,
}

pub fn handle_config(action: ConfigAction, config: &StackplanConfig) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        },
        ConfigAction::Path => {
            match stackplan_config::config_dir() {
                Some(dir) => println!("{}", dir.join("stackplan.toml").display()),
                None => eprintln!("no home directory; only ./stackplan.toml is searched"),
            }
            Ok(())
        },
    }
}
