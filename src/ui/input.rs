use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::alert::AlertIntent;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    // The alert is modal.
    if app.alert().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dispatch_alert(AlertIntent::Dismiss);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('p') => app.purge(),
        _ => {}
    }
}
