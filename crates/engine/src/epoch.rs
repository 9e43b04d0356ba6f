//! The year counter: difficulty table, milestone captions and the two tasks driving them.

use log::{debug, info};

use space_garbage_core::{draw_frame, Sleep, Step, Task, TaskContext};

use crate::types::{Emphasis, GUN_YEAR};

/// Milestones shown next to the year, matched exactly.
pub const PHRASES: [(i32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Ticks between two garbage spawns for a year, or `None` while spawning is disabled.
///
/// | year | ticks |
/// |------|-------|
/// | < 1961 | disabled |
/// | 1961-1968 | 20 |
/// | 1969-1980 | 14 |
/// | 1981-1994 | 10 |
/// | 1995-2009 | 8 |
/// | 2010-2019 | 6 |
/// | 2020+ | 2 |
pub fn garbage_delay_ticks(year: i32) -> Option<u32> {
    match year {
        i32::MIN..=1960 => None,
        1961..=1968 => Some(20),
        1969..=1980 => Some(14),
        1981..=1994 => Some(10),
        1995..=2009 => Some(8),
        2010..=2019 => Some(6),
        _ => Some(2),
    }
}

pub fn milestone(year: i32) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, phrase)| *phrase)
}

/// Caption text for a year; unmapped years show the bare number.
///
/// # Examples
///
/// ```
/// use space_garbage_engine::epoch::caption;
///
/// assert_eq!(caption(1961), "Year 1961: Gagarin flew!");
/// assert_eq!(caption(1962), "Year 1962");
/// ```
pub fn caption(year: i32) -> String {
    match milestone(year) {
        Some(phrase) => format!("Year {}: {}", year, phrase),
        None => format!("Year {}", year),
    }
}

pub fn gun_available(year: i32) -> bool {
    year >= GUN_YEAR
}

/// Increments the world epoch every `ticks_per_year` ticks until the game is over.
#[derive(Debug, Clone)]
pub struct EpochAdvance {
    ticks_per_year: u32,
    sleep: Sleep,
    started: bool,
}

impl EpochAdvance {
    pub fn new(ticks_per_year: u32) -> Self {
        Self {
            ticks_per_year: ticks_per_year.max(1),
            sleep: Sleep::default(),
            started: false,
        }
    }
}

impl Task for EpochAdvance {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if cx.world.is_game_over() {
            return Step::Done;
        }
        if self.sleep.tick() {
            return Step::Continue;
        }

        if self.started {
            let year = cx.world.advance_epoch();
            match milestone(year) {
                Some(phrase) => info!("year {}: {}", year, phrase),
                None => debug!("year {}", year),
            }
        }
        self.started = true;
        self.sleep.start(self.ticks_per_year);
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "epoch-advance"
    }
}

/// Redraws the year caption every tick near the bottom-left corner.
#[derive(Debug, Clone, Default)]
pub struct EpochCaption {
    shown: Option<(u16, String)>,
}

impl EpochCaption {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for EpochCaption {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if let Some((row, text)) = self.shown.take() {
            draw_frame(cx.canvas, row as f64, 2.0, &text, Emphasis::Normal, true);
        }

        let (rows, _) = cx.canvas.size();
        let row = rows.saturating_sub(2);
        let text = caption(cx.world.epoch());
        draw_frame(cx.canvas, row as f64, 2.0, &text, Emphasis::Bold, false);
        self.shown = Some((row, text));
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "epoch-caption"
    }
}
