use clap::{Parser, Subcommand};

use self::{plot::PlotArg, run::RunArg};

mod plot;
mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    /// Options for a simulation run when no mode is given
    #[clap(flatten)]
    run: RunArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Breed rats toward the goal weight and report the result
    Run(#[clap(flatten)] RunArg),
    /// Show the average weight chart of a saved report
    Plot(#[clap(flatten)] PlotArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Run(args.run)) {
        Mode::Run(arg) => run::run(&arg)?,
        Mode::Plot(arg) => plot::run(&arg)?,
    }
    Ok(())
}
