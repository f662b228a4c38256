use std::{path::PathBuf, time::Instant};

use ratbreed_sim::{
    SimulationConfig, SimulationSeed,
    simulation::{Simulation, SimulationOutcome},
};
use ratbreed_stats::descriptive::DescriptiveStats;

use crate::{chart::AverageWeightChart, schema::report::SimulationReport, ui, util::Output};

/// Simulation parameters. Anything left out keeps the built-in default.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Target mean weight in grams
    #[arg(long)]
    goal_weight: Option<u64>,
    /// Rats retained each generation (rounded up to an even number)
    #[arg(long)]
    num_rats: Option<usize>,
    /// Lightest founding weight in grams
    #[arg(long)]
    initial_min_weight: Option<u64>,
    /// Heaviest founding weight in grams
    #[arg(long)]
    initial_max_weight: Option<u64>,
    /// Most common founding weight in grams
    #[arg(long)]
    initial_mode_weight: Option<u64>,
    /// Probability that a pup is mutated
    #[arg(long)]
    mutate_odds: Option<f64>,
    /// Smallest mutation scale factor
    #[arg(long)]
    mutate_min: Option<f64>,
    /// Largest mutation scale factor
    #[arg(long)]
    mutate_max: Option<f64>,
    /// Pups per breeding pair
    #[arg(long)]
    litter_size: Option<usize>,
    /// Generations per year
    #[arg(long)]
    litters_per_year: Option<usize>,
    /// Maximum number of generations
    #[arg(long)]
    generation_limit: Option<usize>,
}

impl ConfigArg {
    fn to_config(&self) -> SimulationConfig {
        let default = SimulationConfig::default();
        SimulationConfig {
            goal_weight: self.goal_weight.unwrap_or(default.goal_weight),
            num_rats: self.num_rats.unwrap_or(default.num_rats),
            initial_min_weight: self.initial_min_weight.unwrap_or(default.initial_min_weight),
            initial_max_weight: self.initial_max_weight.unwrap_or(default.initial_max_weight),
            initial_mode_weight: self
                .initial_mode_weight
                .unwrap_or(default.initial_mode_weight),
            mutate_odds: self.mutate_odds.unwrap_or(default.mutate_odds),
            mutate_min: self.mutate_min.unwrap_or(default.mutate_min),
            mutate_max: self.mutate_max.unwrap_or(default.mutate_max),
            litter_size: self.litter_size.unwrap_or(default.litter_size),
            litters_per_year: self.litters_per_year.unwrap_or(default.litters_per_year),
            generation_limit: self.generation_limit.unwrap_or(default.generation_limit),
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    #[clap(flatten)]
    config: ConfigArg,
    /// Random seed as 32 hex digits (random if omitted)
    #[arg(long)]
    pub(super) seed: Option<SimulationSeed>,
    /// Report output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Show the average weight chart after the run
    #[arg(long)]
    plot: bool,
    /// Also save the average weight chart as an SVG image
    #[arg(long, value_name = "PATH")]
    pub(super) plot_file: Option<PathBuf>,
    /// Do not print per-generation progress
    #[arg(long)]
    pub(super) quiet: bool,
}

impl RunArg {
    pub(super) fn to_config(&self) -> SimulationConfig {
        self.config.to_config()
    }
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = arg.to_config();
    let mut simulation = match arg.seed {
        Some(seed) => Simulation::with_seed(config, seed)?,
        None => Simulation::new(config)?,
    };

    let config = simulation.config();
    eprintln!("Seed: {}", simulation.seed());
    eprintln!(
        "Goal weight: {} g, at most {} generations",
        config.goal_weight, config.generation_limit
    );
    eprintln!(
        "Initial weights in rat population: {:?}",
        simulation.initial_population()
    );
    eprintln!(
        "Initial fitness level of population: {:.4}",
        simulation.initial_fitness()
    );
    eprintln!(
        "Number of rats to keep per generation: {}",
        simulation.retain_count()
    );

    while let Some(record) = simulation.step()?.copied() {
        if !arg.quiet {
            eprintln!(
                "Generation {} fitness level: {:.4}",
                record.generation,
                simulation.fitness()
            );
        }
    }

    let outcome = simulation.into_outcome();
    let runtime = start_time.elapsed();
    print_summary(&outcome);
    eprintln!();
    eprintln!("Program runtime was {:.3} seconds.", runtime.as_secs_f64());

    let report = SimulationReport::new(outcome, runtime);
    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_json(&report)?;
    eprintln!("Report saved to {}", output.display_path());

    if let Some(path) = &arg.plot_file {
        AverageWeightChart::new(&report).save_svg(path)?;
        eprintln!("Chart saved to {}", path.display());
    }

    if arg.plot {
        ui::run_tui(&report)?;
    }

    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn print_summary(outcome: &SimulationOutcome) {
    let averages = outcome
        .history
        .iter()
        .map(|r| r.average_weight)
        .collect::<Vec<_>>();

    eprintln!();
    eprintln!("Average weight per generation: {averages:.0?}");
    eprintln!();
    eprintln!("Number of generations: {}", outcome.generations);
    eprintln!();
    eprintln!("Number of years: {}", outcome.elapsed_years);
    eprintln!();
    eprintln!("Result: {}", outcome.status);
    eprintln!("  Final fitness: {:.4}", outcome.final_fitness);
    if let Some(stats) =
        DescriptiveStats::new(outcome.final_population.iter().map(|&w| w as f64))
    {
        eprintln!("  Final population: {} rats", outcome.final_population.len());
        eprintln!("    Min:    {:.0}", stats.min);
        eprintln!("    Median: {:.0}", stats.median);
        eprintln!("    Max:    {:.0}", stats.max);
        eprintln!("    Mean:   {:.1}", stats.mean);
        eprintln!("    StdDev: {:.1}", stats.std_dev);
    }
}
