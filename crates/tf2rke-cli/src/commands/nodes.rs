use clap::Args;
use colored::*;
use std::path::PathBuf;

use crate::errors::CliError;
use crate::logger;
use crate::pipeline::preview_nodes;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone)]
pub struct NodesCommand {
    /// Terraform state file holding the rke_*_nodes outputs
    #[arg(long = "terraform-state-file", value_name = "PATH")]
    pub state_file: PathBuf,
}

/// Print the nodes `generate` would emit, with their roles
pub fn handle_nodes(cmd: NodesCommand, opts: GlobalOpts) -> Result<(), CliError> {
    logger::debug(&format!("Previewing nodes of {}", cmd.state_file.display()));

    let preview = preview_nodes(&cmd.state_file)?;

    if preview.role_sets.is_empty() {
        println!("{}", "No nodes found in state file".yellow());
    } else {
        println!("{}", "Nodes:".bold().green());
        let width = preview
            .role_sets
            .iter()
            .map(|(address, _)| address.len())
            .max()
            .unwrap_or(0);
        for (address, roles) in preview.role_sets.iter() {
            let labels: Vec<&str> = roles.iter().map(|role| role.label()).collect();
            let padded = format!("{:width$}", address, width = width);
            println!("  {}  {}", padded.cyan(), labels.join(", "));
        }
    }

    if opts.verbosity_level() > 0 && !preview.ignored_outputs.is_empty() {
        println!();
        println!("{}", "Ignored outputs:".bold());
        for name in &preview.ignored_outputs {
            println!("  {}", name.dimmed());
        }
    }

    Ok(())
}
