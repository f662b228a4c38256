use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::schema::report::SimulationReport;

use self::history_chart::HistoryChartScreen;

mod history_chart;

/// Shows the report's average weight chart until the user quits.
pub(crate) fn run_tui(report: &SimulationReport) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_screen(&mut terminal, HistoryChartScreen::new(report));
    ratatui::restore();
    result
}

fn run_screen(
    terminal: &mut DefaultTerminal,
    mut screen: HistoryChartScreen,
) -> anyhow::Result<()> {
    while !screen.should_exit() {
        terminal.draw(|f| screen.draw(f))?;
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                screen.handle_key_event(key_event);
            }
            _ => {}
        }
    }
    Ok(())
}
