use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use veritas_core::DistributionOptions;

#[derive(Parser, Debug)]
#[command(name = "veritas", version, about = "Build action trees and inspect cluster snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively build an action tree and print it as JSON
    BuildAction(BuildActionArgs),
    /// Print how tasks and LRP instances are spread across cells
    PrintDistribution(PrintDistributionArgs),
}

#[derive(Args, Debug)]
pub struct BuildActionArgs {
    /// YAML file declaring pre-fabricated actions offered in every menu
    #[arg(long)]
    pub prefabs: Option<PathBuf>,

    /// Answer the prompts from a file, one answer per line
    #[arg(long)]
    pub script: Option<PathBuf>,

    #[arg(long, default_value = "Build Action")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct PrintDistributionArgs {
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub tasks: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub lrps: bool,

    /// Clear the terminal first
    #[arg(long)]
    pub clear: bool,

    /// Store dump in JSON, read from stdin when omitted
    pub file: Option<PathBuf>,
}

impl From<&PrintDistributionArgs> for DistributionOptions {
    fn from(args: &PrintDistributionArgs) -> Self {
        Self {
            tasks: args.tasks,
            lrps: args.lrps,
            clear: args.clear,
        }
    }
}
