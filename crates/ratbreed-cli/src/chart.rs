//! Average weight chart data, shared by the terminal screen and the SVG
//! export.

use std::path::Path;

use anyhow::Context as _;
use plotters::prelude::*;

use crate::schema::report::SimulationReport;

pub(crate) const TITLE: &str = "Average Weight Evolution";
pub(crate) const X_DESC: &str = "Generation";
pub(crate) const Y_DESC: &str = "Average Weight";

const SVG_SIZE: (u32, u32) = (1024, 640);

/// Average weight per generation, plus the goal weight as a horizontal line.
#[derive(Debug, Clone)]
pub(crate) struct AverageWeightChart {
    pub(crate) averages: Vec<(f64, f64)>,
    pub(crate) goal_line: [(f64, f64); 2],
    pub(crate) x_bounds: [f64; 2],
    pub(crate) y_bounds: [f64; 2],
}

impl AverageWeightChart {
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn new(report: &SimulationReport) -> Self {
        let outcome = &report.outcome;
        let averages = outcome
            .history
            .iter()
            .map(|r| (r.generation as f64, r.average_weight))
            .collect::<Vec<_>>();
        let goal = outcome.config.goal_weight as f64;

        let x_max = averages.last().map_or(1.0, |&(x, _)| x.max(1.0));
        let y_max = averages.iter().map(|&(_, y)| y).fold(goal, f64::max) * 1.05;

        Self {
            averages,
            goal_line: [(0.0, goal), (x_max, goal)],
            x_bounds: [0.0, x_max],
            y_bounds: [0.0, y_max],
        }
    }

    /// Renders the chart to an SVG file at `path`.
    pub(crate) fn save_svg(&self, path: &Path) -> anyhow::Result<()> {
        let root = SVGBackend::new(path, SVG_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 28))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(80)
            .build_cartesian_2d(
                self.x_bounds[0]..self.x_bounds[1],
                self.y_bounds[0]..self.y_bounds[1],
            )?;
        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                self.averages.iter().copied(),
                BLUE.stroke_width(2),
            ))?
            .label("average weight")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
        chart
            .draw_series(LineSeries::new(self.goal_line, RED.stroke_width(1)))?
            .label("goal")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.filled())
            .border_style(BLACK.stroke_width(1))
            .draw()?;

        root.present()
            .with_context(|| format!("failed to write chart to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use ratbreed_sim::{SimulationConfig, SimulationSeed, simulation::Simulation};

    use super::*;

    fn report(generation_limit: usize) -> SimulationReport {
        let config = SimulationConfig {
            generation_limit,
            ..SimulationConfig::default()
        };
        let outcome = Simulation::with_seed(config, SimulationSeed::from_bytes([7; 16]))
            .unwrap()
            .run()
            .unwrap();
        SimulationReport::new(outcome, Duration::ZERO)
    }

    #[test]
    fn test_bounds_cover_history_and_goal() {
        let chart = AverageWeightChart::new(&report(30));
        assert_eq!(chart.averages.len(), 30);
        assert_eq!(chart.x_bounds, [0.0, 29.0]);
        assert!(chart.y_bounds[1] >= 50_000.0);
        assert_eq!(chart.goal_line[1], (29.0, 50_000.0));
    }

    #[test]
    fn test_empty_history_has_nonzero_range() {
        let chart = AverageWeightChart::new(&report(0));
        assert!(chart.averages.is_empty());
        assert_eq!(chart.x_bounds, [0.0, 1.0]);
    }

    #[test]
    fn test_save_svg_writes_titled_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("average_weight_plot.svg");
        AverageWeightChart::new(&report(40)).save_svg(&path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(!svg.is_empty());
        assert!(svg.contains(TITLE));
        assert!(svg.contains(X_DESC));
        assert!(svg.contains(Y_DESC));
    }

    #[test]
    fn test_save_svg_with_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        AverageWeightChart::new(&report(0)).save_svg(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_save_svg_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.svg");
        assert!(AverageWeightChart::new(&report(1)).save_svg(&path).is_err());
    }
}
