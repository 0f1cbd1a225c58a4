//! Terminal demo: one screen whose body follows a [`ContentProvider`]'s state.
//!
//! [`ContentProvider`]: crate::provider::ContentProvider

pub mod alert;
pub mod app;
pub mod events;
mod input;
pub mod mvi;
pub mod numbers;
mod render;
mod terminal_guard;
pub mod theme;

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::ui::alert::AlertIntent;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

/// Runs the demo until the user quits. Load attempts run on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, runtime, events.sender());
    app.reload();

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => input::handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => tracing::trace!(cols, rows, "Terminal resized"),
            Ok(AppEvent::Deliver(deliver)) => deliver(),
            Ok(AppEvent::ErrorWithContent(message)) => {
                app.dispatch_alert(AlertIntent::Show { message });
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Demo exited");
    Ok(())
}
