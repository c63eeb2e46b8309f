//! src/main.rs
//! ============================================================================
//! # Registration Form TUI Application Entry Point
//!
//! An async terminal registration form for the traffic-management demo,
//! built with ratatui and tokio. Wires together config, logging, the shared
//! application state, the controller event loop, and the renderer.

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend as Backend};
use tokio::{
    signal,
    sync::{Mutex, MutexGuard, Notify, mpsc},
};
use tracing::{error, info, warn};

use regform_core::{
    Logger,
    config::Config,
    controller::{actions::Action, event_loop::Controller},
    model::app_state::AppState,
    sink::TracingSink,
    view::ui::View,
};

type AppTerminal = Terminal<Backend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app: App = App::new()
        .await
        .context("Failed to initialize application")?;

    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// Application runtime wiring.
struct App {
    terminal: AppTerminal,
    controller: Controller,
    state: Arc<Mutex<AppState>>,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new() -> Result<Self> {
        Logger::init_tracing();
        info!("Starting registration form TUI");

        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        let config: Arc<Config> = Arc::new(Config::load().await.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }));

        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();

        let state: Arc<Mutex<AppState>> = Arc::new(Mutex::new(AppState::new(
            config,
            Arc::new(TracingSink),
            action_tx,
        )));

        let controller: Controller = Controller::new(state.clone(), action_rx);
        let shutdown: Arc<Notify> = Arc::new(Notify::new());

        info!("Application initialization complete");

        Ok(Self {
            terminal,
            controller,
            state,
            shutdown,
        })
    }

    /// Run the main application event loop.
    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        info!("Starting main event loop");

        loop {
            self.render().await?;

            let action: Action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_action = self.controller.next_action() => {
                    match maybe_action {
                        Some(action) => action,
                        None => {
                            info!("Event sources ended");
                            break;
                        }
                    }
                }
            };

            if matches!(action, Action::Quit) {
                info!("Quit action received");
                break;
            }

            self.controller.dispatch(action).await;
        }

        info!("Main event loop ended");
        Ok(())
    }

    /// Render the UI if a redraw is needed.
    async fn render(&mut self) -> Result<()> {
        let mut state: MutexGuard<'_, AppState> = self.state.lock().await;

        if state.redraw {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    View::redraw(frame, &state);
                })
                .context("Failed to draw terminal")?;

            state.redraw = false;
        }

        Ok(())
    }

    /// Setup signal handler for graceful shutdown.
    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C signal");
                    shutdown.notify_one();
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {}", e);
        }
    }
}

/// Initialize terminal in raw mode with alternate screen.
fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restore terminal to normal mode.
fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Setup panic handler for graceful terminal restoration.
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
