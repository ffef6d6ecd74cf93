//! Held-key tracking with a snapshot-based display set

use std::time::{Duration, Instant};

/// Tracks which keys are held and what the overlay should display.
///
/// `held` preserves press order so the renderer can pick the most recently
/// pressed key; `displayed` is a snapshot of `held` frozen at the last
/// press. Releasing a key never shrinks the display, only the idle timeout
/// or a fresh press changes it.
#[derive(Debug)]
pub struct KeyTracker {
    held: Vec<String>,
    displayed: Vec<String>,
    last_press: Option<Instant>,
    idle_timeout: Duration,
}

impl KeyTracker {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            held: Vec::new(),
            displayed: Vec::new(),
            last_press: None,
            idle_timeout,
        }
    }

    /// Record a press of an already-normalized label. The caller renders
    /// exactly once after every call.
    pub fn on_press(&mut self, label: &str) {
        if !self.held.iter().any(|k| k == label) {
            self.held.push(label.to_string());
        }
        self.displayed = self.held.clone();
        self.last_press = Some(Instant::now());
    }

    /// Record a release. Only the held list changes; the displayed
    /// snapshot fades via the idle timeout instead.
    pub fn on_release(&mut self, label: &str) {
        self.held.retain(|k| k != label);
    }

    /// Idle poll. Returns true when the display was just cleared and a
    /// render is needed. This is the only path that empties the display.
    pub fn idle_tick(&mut self) -> bool {
        if self.displayed.is_empty() {
            return false;
        }
        match self.last_press {
            Some(at) if at.elapsed() > self.idle_timeout => {
                self.displayed.clear();
                self.held.clear();
                true
            }
            _ => false,
        }
    }

    /// Labels the renderer should draw, in press order.
    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    /// Safety clear applied when an empty display is rendered.
    pub fn clear_held(&mut self) {
        self.held.clear();
    }

    #[cfg(test)]
    fn held(&self) -> &[String] {
        &self.held
    }
}
