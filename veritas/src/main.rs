mod cli;
mod prompter;

use std::{
    fs::{self, File},
    io,
};

use anyhow::Context;
use clap::Parser;
use cli::{BuildActionArgs, Cli, Command, PrintDistributionArgs};
use log::warn;
use prompter::InquirePrompter;
use veritas_core::{DistributionOptions, prompt::ScriptedPrompter};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    match Cli::parse().command {
        Command::BuildAction(args) => build_action(&args),
        Command::PrintDistribution(args) => print_distribution(&args),
    }
}

fn build_action(args: &BuildActionArgs) -> anyhow::Result<()> {
    let prefabs = match &args.prefabs {
        Some(path) => veritas_core::load(path).with_context(|| path.display().to_string())?,
        None => Vec::new(),
    };

    let action = match &args.script {
        Some(path) => {
            let script =
                fs::read_to_string(path).with_context(|| path.display().to_string())?;
            let mut prompter = ScriptedPrompter::from_script(&script);
            let action = veritas_core::build_action(&mut prompter, &args.description, &prefabs)?;
            if prompter.remaining() > 0 {
                warn!("{} scripted answer(s) left unused", prompter.remaining());
            }
            action
        }
        None => veritas_core::build_action(&mut InquirePrompter, &args.description, &prefabs)?,
    };

    println!("{}", serde_json::to_string_pretty(&action)?);

    Ok(())
}

fn print_distribution(args: &PrintDistributionArgs) -> anyhow::Result<()> {
    let options = DistributionOptions::from(args);
    let stdout = io::stdout().lock();

    match &args.file {
        Some(path) => {
            let file = File::open(path).with_context(|| path.display().to_string())?;
            veritas_core::print_distribution(file, stdout, options)
        }
        None => veritas_core::print_distribution(io::stdin().lock(), stdout, options),
    }
}
