//! TUI runner - terminal lifecycle and the main event loop

use fontscope_app::Engine;
use fontscope_client::AnalysisService;
use fontscope_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// The engine may already hold a selected file (e.g. from the command
/// line). Outstanding requests are aborted on exit.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: AnalysisService + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        // Typing paths in the prompt still works without it
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut engine);

    terminal::disable_paste();
    ratatui::restore();

    engine.shutdown().await;
    info!("fontscope exiting");

    result
}

fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: AnalysisService + Sync + 'static,
{
    while !engine.should_quit() {
        // Progress, resolutions and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
