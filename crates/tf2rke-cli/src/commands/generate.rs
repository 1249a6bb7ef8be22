use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use tf2rke_config::Config;
use tf2rke_manifest::{render, write_to_path};

use crate::errors::CliError;
use crate::logger;
use crate::pipeline::generate_manifest;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Terraform state file holding the rke_*_nodes outputs
    #[arg(long = "terraform-state-file", value_name = "PATH")]
    pub state_file: PathBuf,

    /// SSH private key RKE uses to reach the nodes
    #[arg(long = "ssh-key-file", value_name = "PATH")]
    pub ssh_key_file: PathBuf,

    /// Manifest file to write (default: config output-file, then cluster.yml)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn handle_generate(cmd: GenerateCommand, _opts: GlobalOpts) -> Result<(), CliError> {
    logger::debug(&format!("Handling generate command: {:?}", cmd));

    let config = Config::load()?;
    let defaults = config.cluster_defaults()?;
    logger::info(&format!(
        "Using network plugin '{}'",
        defaults.network_plugin()
    ));

    let manifest = generate_manifest(&cmd.state_file, &cmd.ssh_key_file, &defaults)?;

    if cmd.stdout {
        let content = render(&manifest)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output = config.output_file(cmd.output);
    write_to_path(&manifest, &output)?;

    logger::success(&format!(
        "Wrote {} with {} nodes",
        output.display(),
        manifest.nodes.len()
    ));
    Ok(())
}
