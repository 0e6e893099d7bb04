//! `confedit`: choose a config, alias or settings file and open it in an editor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    complete::cmd_complete,
    config::{cmd_config, ConfigAction},
    edit::{cmd_edit, EditArgs},
};

#[derive(Parser)]
#[command(
    name = "confedit",
    version,
    about = "Edit run-control, alias, shell and site settings files",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    edit: EditArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a file from the list and open it in the editor (default)
    Edit(EditArgs),

    /// Print every candidate file, one per line, for shell completion
    Complete,

    /// Manage confedit configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    confedit::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Edit(args)) => cmd_edit(&args)?,
        None => cmd_edit(&cli.edit)?,
        Some(Commands::Complete) => cmd_complete()?,
        Some(Commands::Config { action }) => cmd_config(action)?,
    }

    Ok(())
}
