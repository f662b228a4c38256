use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph},
};

use crate::{
    chart::{self, AverageWeightChart},
    schema::report::SimulationReport,
};

/// Line chart of average weight per generation, with the goal as a
/// horizontal reference line.
#[derive(Debug)]
pub struct HistoryChartScreen {
    summary: String,
    chart: AverageWeightChart,
    show_goal: bool,
    should_exit: bool,
}

impl HistoryChartScreen {
    pub fn new(report: &SimulationReport) -> Self {
        let outcome = &report.outcome;
        let summary = format!(
            "seed {} | {} after {} generations ({} years) | final fitness {:.4}",
            outcome.seed,
            outcome.status,
            outcome.generations,
            outcome.elapsed_years,
            outcome.final_fitness,
        );

        Self {
            summary,
            chart: AverageWeightChart::new(report),
            show_goal: true,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('g') => self.show_goal = !self.show_goal,
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [header_area, chart_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = Paragraph::new(self.summary.as_str()).block(Block::bordered().title("Run"));
        frame.render_widget(header, header_area);

        let mut datasets = vec![
            Dataset::default()
                .name("average weight")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&self.chart.averages),
        ];
        if self.show_goal {
            datasets.push(
                Dataset::default()
                    .name("goal")
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Red))
                    .data(&self.chart.goal_line),
            );
        }

        let x_axis = Axis::default()
            .title(chart::X_DESC)
            .bounds(self.chart.x_bounds)
            .labels(axis_labels(self.chart.x_bounds));
        let y_axis = Axis::default()
            .title(chart::Y_DESC)
            .bounds(self.chart.y_bounds)
            .labels(axis_labels(self.chart.y_bounds));
        let chart = Chart::new(datasets)
            .block(Block::bordered().title(chart::TITLE))
            .x_axis(x_axis)
            .y_axis(y_axis);
        frame.render_widget(chart, chart_area);

        let help = Line::from("q/Esc: quit  g: toggle goal line");
        frame.render_widget(help, help_area);
    }
}

fn axis_labels(bounds: [f64; 2]) -> [String; 3] {
    [
        format!("{:.0}", bounds[0]),
        format!("{:.0}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.0}", bounds[1]),
    ]
}
