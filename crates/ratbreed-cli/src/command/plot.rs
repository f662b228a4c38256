use std::path::PathBuf;

use crate::{chart::AverageWeightChart, schema::report::SimulationReport, ui, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlotArg {
    /// Report file written by a previous run
    report_file: PathBuf,
    /// Save the chart as an SVG image instead of showing it
    #[arg(long, value_name = "PATH")]
    pub(super) plot_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlotArg) -> anyhow::Result<()> {
    let PlotArg {
        report_file,
        plot_file,
    } = arg;

    eprintln!("Loading report from {}...", report_file.display());
    let report: SimulationReport = util::read_json_file("report", report_file)?;
    eprintln!(
        "Loaded {} generations (seed {})",
        report.outcome.generations, report.outcome.seed
    );

    match plot_file {
        Some(path) => {
            AverageWeightChart::new(&report).save_svg(path)?;
            eprintln!("Chart saved to {}", path.display());
        }
        None => ui::run_tui(&report)?,
    }

    Ok(())
}
