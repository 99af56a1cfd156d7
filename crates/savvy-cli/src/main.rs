mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "savvy",
    about = "Ghost Savvy site toolkit — serve the site, seed the CMS, scaffold pages",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root (default: auto-detect from site.yaml or .git/)
    #[arg(long, global = true, env = "SAVVY_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a site workspace in the current directory
    Init,

    /// Start the site server
    Serve {
        /// Port to listen on (default: site.yaml server.port)
        #[arg(long)]
        port: Option<u16>,
        /// Don't open a browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Seed fixture content into the CMS
    Seed {
        /// Which fixture set to push: lab | impact | hub | all
        target: Option<String>,
        /// List the fixtures without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Scaffold a page manifest for a lab project
    #[command(name = "generate-page")]
    GeneratePage {
        /// Project id (slug) the page is generated for
        project_id: String,
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::Seed { target, dry_run } => {
            cmd::seed::run(&root, target.as_deref(), dry_run, cli.json)
        }
        Commands::GeneratePage { project_id, force } => {
            cmd::generate::run(&root, &project_id, force)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
