use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Set up the terminal, run the event loop, and restore the terminal
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config);
    let mut event_handler = EventHandler::new();
    log::info!("Starting with {} rows", config.ui.row_count);

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed, capped at the frame rate
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                needs_render |= app.on_tick();
            }
            EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    log::info!("Event loop finished");
    Ok(())
}
