use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{log_buffer, CustomLogger, LogBuffer};
use crate::state::Session;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

/// Oversees event processing, session state, and terminal output.
///
pub struct App {
    session: Session,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, level: LevelFilter) -> Result<()> {
        let log_entries = log_buffer();
        CustomLogger::new(log_entries.clone(), level).install()?;

        info!("Starting application...");
        let theme = config.theme()?;
        debug!("Using theme '{}'", theme.name);
        let mut app = App::new(config, theme, log_entries);
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    fn new(config: Config, theme: crate::ui::Theme, log_entries: LogBuffer) -> App {
        App {
            session: Session::new(theme, config.hotkeys, log_entries),
        }
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends on an exit request or an error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;
        let result = self.run(&mut terminal);
        let restored = restore_terminal(&mut terminal);
        result?;
        restored?;
        Ok(())
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.session))?;
            if !terminal_event_handler.handle_next(&mut self.session)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, AppError> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| AppError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;
    enable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {}", e)))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), AppError> {
    disable_raw_mode()
        .map_err(|e| AppError::Terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
        .map_err(|e| AppError::Terminal(format!("Failed to leave alternate screen: {}", e)))?;
    terminal.show_cursor()?;
    Ok(())
}
