//! JSON receive helpers for [`State`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::machine::State;

/// Content bytes could not be decoded.
#[derive(Debug, Clone, Error)]
#[error("Failed to decode content: {source}")]
pub struct DecodeError {
    #[source]
    source: Arc<serde_json::Error>,
}

impl DecodeError {
    /// Line of the input where decoding stopped.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<C: DeserializeOwned, E> State<C, E> {
    /// Decodes `bytes` as the new content. A decode failure becomes a
    /// `Failed` state that keeps the current content.
    pub fn with_json(self, bytes: &[u8], map_err: impl FnOnce(DecodeError) -> E) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(content) => self.with_content(content),
            Err(err) => self.with_error(map_err(DecodeError::from(err))),
        }
    }

    pub fn receive_json(&mut self, bytes: &[u8], map_err: impl FnOnce(DecodeError) -> E) {
        self.replace_with(|state| state.with_json(bytes, map_err));
    }
}

impl<C: DeserializeOwned> State<C, DecodeError> {
    pub fn with_decoded(self, bytes: &[u8]) -> Self {
        self.with_json(bytes, |err| err)
    }

    pub fn receive_decoded(&mut self, bytes: &[u8]) {
        self.receive_json(bytes, |err| err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_into_present() {
        let state: State<Vec<u32>, DecodeError> = State::new().with_decoded(b"[1, 2, 3]");
        assert!(matches!(state, State::Present { content } if content == vec![1, 2, 3]));
    }

    #[test]
    fn decode_failure_keeps_retained_content() {
        let mut state: State<Vec<u32>, String> = State::new().with_content(vec![4]);
        state.receive_json(b"{not json", |err| err.to_string());

        match state {
            State::Failed { error, content } => {
                assert!(error.starts_with("Failed to decode content"));
                assert_eq!(content, Some(vec![4]));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn decode_error_reports_position() {
        let state: State<Vec<u32>, DecodeError> = State::new().with_decoded(b"[1,\n x]");
        let error = state.error().expect("decode should fail");
        assert_eq!(error.line(), 2);
        assert!(error.column() > 0);
    }
}
