use crate::config::Config;
use crate::error::AppError;
use crate::events::camera::{Handler as CameraEventHandler, Request as CameraRequest};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::ui::Theme;
use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use tui_logger::{init_logger, set_default_level};

pub type CameraRequestSender = std::sync::mpsc::Sender<CameraRequest>;
type CameraRequestReceiver = std::sync::mpsc::Receiver<CameraRequest>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Info).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<CameraRequest>();
        let theme = Theme::from_name(&config.theme_name);
        info!("Using theme '{}'.", theme.name);
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                config.display_name.clone(),
                theme,
            ))),
            config,
        };
        app.start_camera(rx);
        app.start_ui()?;

        // Write the config file back so first runs leave defaults on disk.
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread serving camera capture requests so the render
    /// loop never blocks on a capture attempt.
    ///
    fn start_camera(&self, receiver: CameraRequestReceiver) {
        debug!("Creating new thread for camera captures...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let mut handler = CameraEventHandler::new(&cloned_state);
            while let Ok(request) = receiver.recv() {
                match handler.handle(request) {
                    Ok(_) => (),
                    Err(e) => error!("Failed to handle camera event: {}", e),
                }
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow!("State lock poisoned"))?;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
