//! The "Numbers" screen: a list of integers loaded by a scripted source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;

use crate::binding::ContentBindable;
use crate::config::{LoaderConfig, Outcome};
use crate::provider::{Completion, ContentSource};
use crate::ui::events::AppEvent;

pub type Numbers = Vec<i64>;

const SAMPLE: [i64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("This is an error example.")]
pub struct NumbersError;

/// Content region of the screen: one line per number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumbersView {
    lines: Vec<String>,
}

impl NumbersView {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ContentBindable<Numbers> for NumbersView {
    fn bind(&mut self, content: &Numbers) {
        self.lines = content.iter().map(|n| n.to_string()).collect();
    }
}

/// Loads numbers on the tokio runtime after a fixed delay.
///
/// Outcomes are taken from the configured script in order, wrapping around.
/// The finished completion is handed back to the UI thread as
/// [`AppEvent::Deliver`], so every publish happens there.
pub struct NumbersSource {
    runtime: Handle,
    events: Sender<AppEvent>,
    delay: Duration,
    outcomes: Vec<Outcome>,
    cursor: AtomicUsize,
}

impl NumbersSource {
    pub fn new(runtime: Handle, events: Sender<AppEvent>, config: &LoaderConfig) -> Self {
        Self {
            runtime,
            events,
            delay: Duration::from_millis(config.delay_ms),
            outcomes: config.outcomes.clone(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Returns `None` for an empty script.
    fn next_outcome(&self) -> Option<Outcome> {
        if self.outcomes.is_empty() {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.outcomes.len();
        Some(self.outcomes[index])
    }
}

/// Result of one scripted attempt.
pub fn numbers_for(outcome: Outcome) -> Result<Numbers, NumbersError> {
    match outcome {
        Outcome::Numbers => Ok(SAMPLE.to_vec()),
        Outcome::Empty => Ok(Vec::new()),
        Outcome::Error => Err(NumbersError),
    }
}

impl ContentSource for NumbersSource {
    type Content = Numbers;
    type Error = NumbersError;

    fn load_content(&self, completion: Completion<Numbers, NumbersError>) {
        let result = self.next_outcome().map_or(Err(NumbersError), numbers_for);
        let events = self.events.clone();
        let delay = self.delay;
        tracing::debug!(token = completion.token(), ?delay, ok = result.is_ok(), "Scheduling load");

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let deliver = AppEvent::Deliver(Box::new(move || completion.complete(result)));
            if events.send(deliver).is_err() {
                tracing::debug!("UI is gone, dropping load result");
            }
        });
    }
}
