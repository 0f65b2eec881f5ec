//! TUI Renderer for the inventory screen
//!
//! Runs the terminal event loop around an [`App`]: draw the components'
//! current outputs, poll for a key, hand it to the controller, repeat until
//! the controller asks to quit.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::presentation::components::Component;
use crate::presentation::views::tui::{
    CarFormWidget, SelectFieldWidget, StatusBarWidget, TableWidget,
};

pub struct TuiRenderer {
    app: App,
}

impl TuiRenderer {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Set up the terminal, run the event loop, and restore the terminal
    /// even when the loop fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.app.should_quit() {
            terminal.draw(|f| draw(f, &self.app))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                // Only handle key press events, not release
                && key.kind == KeyEventKind::Press
            {
                self.app.handle_key(key);
            }
        }

        Ok(())
    }
}

/// Layout: [filter | table + form | status bar]
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
    ])
    .split(f.area());

    let filter_block = Block::default().title("Filter").borders(Borders::ALL);
    let filter_area = filter_block.inner(rows[0]);
    f.render_widget(filter_block, rows[0]);
    f.render_widget(
        SelectFieldWidget::new(app.filter().output()).compact(true),
        filter_area,
    );

    let main = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);
    f.render_widget(TableWidget::new(app.table().output()), main[0]);
    f.render_widget(CarFormWidget::new(app.form().output()), main[1]);

    f.render_widget(StatusBarWidget::new(app.status()), rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_store::{RecordCollection, ReferenceData};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_shows_all_panes() {
        let app = App::new(RecordCollection::new(ReferenceData::demo())).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();

        terminal.draw(|f| draw(f, &app)).unwrap();

        let screen = crate::presentation::views::tui::buffer_lines(terminal.backend().buffer())
            .join("\n");
        assert!(screen.contains("Brand: < All brands >"));
        assert!(screen.contains("All cars (10)"));
        assert!(screen.contains("New car"));
        assert!(screen.contains("Loaded 10 cars"));
    }
}
