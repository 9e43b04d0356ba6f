//! Shared types and constants for the space garbage scene.
//!
//! Everything here is plain data with no external dependencies, so it can be used by the
//! scheduler core, the scene tasks and the terminal front-end alike.
//!
//! # Timing Constants
//!
//! All durations are expressed in scheduler ticks unless the name says otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Real-time pause between two scheduler sweeps |
//! | `BLINK_DIM_TICKS` | 20 | Star stays dim |
//! | `BLINK_NORMAL_TICKS` | 3 | Star at normal brightness (twice per cycle) |
//! | `BLINK_BOLD_TICKS` | 5 | Star stays bold |
//! | `TICKS_PER_YEAR` | 15 | Epoch advance period |
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{Controls, Emphasis, TICK_MS};
//!
//! assert_eq!(TICK_MS, 100);
//! assert!(Controls::default().is_idle());
//! assert_eq!(Emphasis::default(), Emphasis::Normal);
//! ```

/// Real-time interval between scheduler sweeps in milliseconds.
pub const TICK_MS: u64 = 100;

/// Number of stars in the default sky.
pub const STARS_COUNT: usize = 100;

/// Symbols a star is drawn with.
pub const STAR_SYMBOLS: &str = "+*.:";

/// Ticks a star stays dim.
pub const BLINK_DIM_TICKS: u32 = 20;

/// Ticks a star stays at normal brightness (used twice per cycle).
pub const BLINK_NORMAL_TICKS: u32 = 3;

/// Ticks a star stays bold.
pub const BLINK_BOLD_TICKS: u32 = 5;

/// First year shown on the caption.
pub const START_YEAR: i32 = 1957;

/// Ticks between two epoch increments (1.5s at the default tick rate).
pub const TICKS_PER_YEAR: u32 = 15;

/// Year the plasma gun becomes available.
pub const GUN_YEAR: i32 = 2020;

/// Rows per tick a garbage sprite falls.
pub const GARBAGE_SPEED: f64 = 0.5;

/// Default projectile speed along rows (negative is up).
pub const FIRE_ROW_SPEED: f64 = -0.3;

/// Default projectile speed along columns.
pub const FIRE_COLUMN_SPEED: f64 = 0.0;

/// Ship speed limit per axis, in cells per tick.
pub const SHIP_SPEED_LIMIT: f64 = 2.0;

/// Fraction of speed kept on every tick.
pub const SHIP_FADING: f64 = 0.8;

/// How many times each ship frame is repeated in the animation cycle.
pub const SHIP_FRAME_REPEAT: usize = 2;

/// Width of the frame drawn around the field.
pub const BORDER_WIDTH: u16 = 1;

/// Text emphasis used when writing a symbol to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    Dim,
    #[default]
    Normal,
    Bold,
}

impl Emphasis {
    /// Parse emphasis from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use space_garbage_types::Emphasis;
    ///
    /// assert_eq!(Emphasis::from_str("dim"), Some(Emphasis::Dim));
    /// assert_eq!(Emphasis::from_str("BOLD"), Some(Emphasis::Bold));
    /// assert_eq!(Emphasis::from_str("blink"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dim" => Some(Emphasis::Dim),
            "normal" => Some(Emphasis::Normal),
            "bold" => Some(Emphasis::Bold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emphasis::Dim => "dim",
            Emphasis::Normal => "normal",
            Emphasis::Bold => "bold",
        }
    }
}

/// One sample of player controls.
///
/// Deltas are `-1`, `0` or `1`; `fire` is set when a shot was requested since the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub row_delta: i8,
    pub column_delta: i8,
    pub fire: bool,
}

impl Controls {
    pub const fn new(row_delta: i8, column_delta: i8, fire: bool) -> Self {
        Self {
            row_delta,
            column_delta,
            fire,
        }
    }

    /// No movement and no shot.
    pub fn is_idle(&self) -> bool {
        self.row_delta == 0 && self.column_delta == 0 && !self.fire
    }

    /// Fold another sample into this one.
    ///
    /// The latest nonzero direction wins per axis and a shot request is sticky.
    pub fn merge(&mut self, other: Controls) {
        if other.row_delta != 0 {
            self.row_delta = other.row_delta.signum();
        }
        if other.column_delta != 0 {
            self.column_delta = other.column_delta.signum();
        }
        self.fire |= other.fire;
    }
}
