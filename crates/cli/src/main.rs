mod pipeline;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pageflow",
    version,
    about = "Extract page transition graphs from compiled UI-application projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the page transition graph for a project and dump it
    Extract {
        /// Exported analysis model of the project (JSON)
        #[arg(long)]
        project: PathBuf,

        /// Directory holding the main_pages.json / router_map.json profiles;
        /// defaults to the project root recorded in the model
        #[arg(long)]
        manifest_dir: Option<PathBuf>,

        /// Output directory for the .dot and .json dumps
        #[arg(long, default_value = "out")]
        out: PathBuf,

        /// Graph name, used for output file names and the dot header
        #[arg(long, default_value = "ptg")]
        name: String,

        /// Restrict the dot dump to pages reachable from this page path
        #[arg(long)]
        dot_entry: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract {
            project,
            manifest_dir,
            out,
            name,
            dot_entry,
        } => pipeline::run(&pipeline::ExtractConfig {
            project,
            manifest_dir,
            out,
            name,
            dot_entry,
        }),
    }
}
