use clap::Subcommand;
use colored::*;

use tf2rke_config::Config;

use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the stored configuration and the effective cluster defaults
    Show,
    /// Set a configuration value (output-file, image.<service>)
    Set { key: String, value: String },
    /// Print the path of the configuration file
    Path,
}

pub fn handle_config(action: Option<ConfigAction>, opts: GlobalOpts) -> Result<(), CliError> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", "Configuration:".bold().green());
            if config.is_empty() {
                if opts.verbosity_level() > 0 {
                    println!("  {}", "(empty)".yellow());
                }
            } else {
                for (key, value) in config.values_iter() {
                    println!("  {}: {}", key.cyan(), value);
                }
            }

            let defaults = config.cluster_defaults()?;
            println!("{}", "Cluster defaults:".bold().green());
            println!("  {}: {}", "network-plugin".cyan(), defaults.network_plugin());
            for (service, image) in defaults.images.entries() {
                println!("  {}: {}", format!("image.{}", service).cyan(), image);
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, value.clone())?;
            config.save()?;
            logger::success(&format!("Set {} = {}", key, value));
        }
        ConfigAction::Path => {
            let config_path = Config::path()?;
            logger::debug(&format!("Reading config from: {}", config_path.display()));
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
