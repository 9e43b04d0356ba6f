//! Collaborator seams: the rendering surface and the input source.
//!
//! The core only ever talks to these traits. The terminal crate provides the real surface and
//! the input crate the real keyboard; tests use an in-memory framebuffer and scripted controls.

use std::time::Duration;

use anyhow::Result;

use crate::types::{Controls, Emphasis};

/// A character grid tasks draw into.
pub trait Canvas {
    /// Grid size as `(rows, columns)`.
    fn size(&self) -> (u16, u16);

    /// Write one symbol. Out-of-range coordinates are ignored.
    fn write(&mut self, row: u16, column: u16, symbol: char, emphasis: Emphasis);

    /// Flush one frame to the viewer.
    fn present(&mut self) -> Result<()>;
}

/// Non-blocking source of player controls.
pub trait InputSource {
    /// Take the controls accumulated since the previous poll.
    ///
    /// Returns [`Controls::default`] when nothing is pending.
    fn poll(&mut self) -> Controls;

    /// Block for one tick interval.
    ///
    /// Sources backed by an event queue should keep collecting input while waiting.
    fn wait(&mut self, timeout: Duration) -> Result<()> {
        std::thread::sleep(timeout);
        Ok(())
    }

    /// Whether the viewer asked to leave.
    fn quit_requested(&self) -> bool {
        false
    }
}

/// An input source that never produces anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Controls {
        Controls::default()
    }
}

/// Replays a fixed list of samples, one per poll, then goes idle.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    samples: Vec<Controls>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(samples: Vec<Controls>) -> Self {
        Self { samples, next: 0 }
    }

    /// Number of polls served so far.
    pub fn polls(&self) -> usize {
        self.next
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Controls {
        let sample = self.samples.get(self.next).copied().unwrap_or_default();
        self.next += 1;
        sample
    }

    fn wait(&mut self, _timeout: Duration) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_then_idles() {
        let mut input =
            ScriptedInput::new(vec![Controls::new(0, 1, false), Controls::new(-1, 0, true)]);
        assert_eq!(input.poll(), Controls::new(0, 1, false));
        assert_eq!(input.poll(), Controls::new(-1, 0, true));
        assert!(input.poll().is_idle());
        assert_eq!(input.polls(), 3);
        assert!(!input.quit_requested());
    }
}
