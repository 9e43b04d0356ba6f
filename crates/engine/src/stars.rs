//! Blinking stars.

use space_garbage_core::{Sleep, Step, Task, TaskContext};

use crate::types::{Emphasis, BLINK_BOLD_TICKS, BLINK_DIM_TICKS, BLINK_NORMAL_TICKS};

/// One blink cycle: emphasis and how many ticks it is held.
const PHASES: [(Emphasis, u32); 4] = [
    (Emphasis::Dim, BLINK_DIM_TICKS),
    (Emphasis::Normal, BLINK_NORMAL_TICKS),
    (Emphasis::Bold, BLINK_BOLD_TICKS),
    (Emphasis::Normal, BLINK_NORMAL_TICKS),
];

/// A star cycling through its brightness phases forever.
#[derive(Debug, Clone)]
pub struct Blink {
    row: u16,
    column: u16,
    symbol: char,
    offset_ticks: u32,
    phase: usize,
    started: bool,
    sleep: Sleep,
}

impl Blink {
    /// `offset_ticks` delays the first phase so stars do not blink in unison.
    pub fn new(row: u16, column: u16, symbol: char, offset_ticks: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            offset_ticks,
            phase: 0,
            started: false,
            sleep: Sleep::default(),
        }
    }
}

impl Task for Blink {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if self.sleep.tick() {
            return Step::Continue;
        }

        if !self.started {
            self.started = true;
            if self.offset_ticks > 0 {
                self.sleep.start(self.offset_ticks);
                return Step::Continue;
            }
        }

        let (emphasis, ticks) = PHASES[self.phase];
        cx.canvas.write(self.row, self.column, self.symbol, emphasis);
        self.phase = (self.phase + 1) % PHASES.len();
        self.sleep.start(ticks);
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "blink"
    }
}
