//! User notification interface
//!
//! The board reports validation failures through `alert` and asks before
//! destructive actions through `confirm`.

use std::sync::{Arc, Mutex};

pub trait Notifier: Send {
    /// Show a message to the user
    fn alert(&self, message: &str);

    /// Ask the user a yes/no question
    fn confirm(&self, message: &str) -> bool;
}

/// Notifier that writes alerts to the log and answers every confirmation
/// with a fixed value
#[derive(Debug, Clone, Copy)]
pub struct LogNotifier {
    answer: bool,
}

impl LogNotifier {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        tracing::info!(answer = self.answer, "{}", message);
        self.answer
    }
}

#[derive(Debug, Default)]
struct SessionState {
    alerts: Vec<String>,
    answer: bool,
}

/// Notifier shared between the server and the board it owns
///
/// The server sets the confirmation answer from tool parameters before
/// calling into the board, and drains collected alerts into the tool
/// response afterwards. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct SessionNotifier {
    state: Arc<Mutex<SessionState>>,
}

impl SessionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer given to the next confirmations
    pub fn answer_with(&self, answer: bool) {
        self.state.lock().unwrap().answer = answer;
    }

    /// Take every alert raised since the last call
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.state.lock().unwrap().alerts)
    }
}

impl Notifier for SessionNotifier {
    fn alert(&self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.state.lock().unwrap().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let answer = self.state.lock().unwrap().answer;
        tracing::debug!(answer, "confirm: {}", message);
        answer
    }
}
