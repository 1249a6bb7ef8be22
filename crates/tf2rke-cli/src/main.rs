use clap::{Parser, Subcommand};
use tf2rke::{
    commands::{
        config::{self, ConfigAction},
        generate, nodes,
    },
    logger, GlobalOpts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tf2rke")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Terraform state to RKE cluster configuration",
    long_about = "tf2rke turns the node addresses a Terraform run published into an RKE cluster.yml."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the RKE cluster manifest from a Terraform state file
    Generate(generate::GenerateCommand),
    /// Show the nodes and roles a Terraform state file describes
    Nodes(nodes::NodesCommand),
    /// Configure tf2rke
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.quiet) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let result = match cli.command {
        Commands::Generate(cmd) => generate::handle_generate(cmd, cli.global),
        Commands::Nodes(cmd) => nodes::handle_nodes(cmd, cli.global),
        Commands::Config { action } => config::handle_config(action, cli.global),
    };

    if let Err(e) = result {
        logger::error(&e.to_string());
        if logger::get_verbosity() > 0 {
            logger::show_log_path();
        }
        std::process::exit(1);
    }
}
