//! Non-blocking keyboard input source.
//!
//! Key events are collected while the scene waits between ticks and folded into one
//! [`Controls`] sample when the ship polls.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;

use space_garbage_core::InputSource;

use crate::map::{handle_key_event, should_quit};
use crate::types::Controls;

/// Samples kept between two polls; later samples are folded into the last slot.
const MAX_PENDING: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    pending: ArrayVec<Controls, MAX_PENDING>,
    quit: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event.
    ///
    /// Presses and terminal auto-repeats both count; releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            debug!("quit requested");
            self.quit = true;
            return;
        }
        if let Some(controls) = handle_key_event(key) {
            self.push(controls);
        }
    }

    /// Samples waiting for the next poll.
    pub fn pending(&self) -> &[Controls] {
        &self.pending
    }

    fn push(&mut self, controls: Controls) {
        if let Err(overflow) = self.pending.try_push(controls) {
            if let Some(last) = self.pending.last_mut() {
                last.merge(overflow.element());
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Controls {
        let mut sample = Controls::default();
        for controls in self.pending.drain(..) {
            sample.merge(controls);
        }
        sample
    }

    fn wait(&mut self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            if self.quit || Instant::now() >= deadline {
                return Ok(());
            }
        }
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
