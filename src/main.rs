//! Courier - terminal browser for saved HTTP request collections
//!
//! Architecture:
//! - UI Layer (Ratatui) - input polling and frame drawing
//! - App Layer - session state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use courier::cli::Args;
use courier::constants::{APP_NAME, INPUT_POLL_INTERVAL, LOG_FILE_NAME, REQUEST_TIMEOUT};
use courier::messages::ui_events::terminal_event_to_ui_event;
use courier::messages::{NetworkCommand, NetworkResponse, UiEvent};
use courier::{load_collection, NetworkActor, Session};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging to file; stdout belongs to the terminal UI
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        app = APP_NAME,
        version = env!("CARGO_PKG_VERSION"),
        collection = %args.collection.display(),
        "Starting"
    );

    let mut collection = match load_collection(&args.collection) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load collection");
            eprintln!("Error loading collection: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Spawn network actor
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, mut net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let network_actor = NetworkActor::new(net_resp_tx, REQUEST_TIMEOUT)?;
    let network = tokio::spawn(network_actor.run(net_cmd_rx));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(&mut collection, net_cmd_tx);
    let size = terminal.size()?;
    session.handle_ui_event(UiEvent::Resize {
        width: size.width,
        height: size.height,
    });

    run_ui_loop(&mut terminal, &mut session, &mut net_resp_rx)?;

    let _ = network.await;
    tracing::info!("Session ended");
    Ok(ExitCode::SUCCESS)
}

/// Run the input/render loop until the session quits.
///
/// Executions happen on the network task; their outcomes are drained here
/// between input polls so the loop never waits on the network.
fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    session: &mut Session<'_>,
    net_rx: &mut mpsc::UnboundedReceiver<NetworkResponse>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| f.render_widget(Paragraph::new(session.render()), f.area()))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Some(event) = terminal_event_to_ui_event(event::read()?) {
                if session.handle_ui_event(event) {
                    break;
                }
            }
        }

        while let Ok(response) = net_rx.try_recv() {
            session.handle_response(response);
        }
    }

    Ok(())
}
