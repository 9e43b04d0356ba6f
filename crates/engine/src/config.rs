//! Scene configuration.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{
    FIRE_COLUMN_SPEED, FIRE_ROW_SPEED, GARBAGE_SPEED, SHIP_FRAME_REPEAT, STARS_COUNT, START_YEAR,
    TICKS_PER_YEAR, TICK_MS,
};

/// Tunables for a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub stars: usize,
    pub start_year: i32,
    pub ticks_per_year: u32,
    pub garbage_speed: f64,
    pub fire_row_speed: f64,
    pub fire_column_speed: f64,
    /// How many times each ship frame is repeated in the animation cycle.
    pub ship_frame_repeat: usize,
    /// Ticks between two ship frame swaps.
    pub ship_frame_ticks: u32,
    pub assets_dir: PathBuf,
    /// Draw obstacle bounding boxes (debug).
    pub show_obstacles: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            stars: STARS_COUNT,
            start_year: START_YEAR,
            ticks_per_year: TICKS_PER_YEAR,
            garbage_speed: GARBAGE_SPEED,
            fire_row_speed: FIRE_ROW_SPEED,
            fire_column_speed: FIRE_COLUMN_SPEED,
            ship_frame_repeat: SHIP_FRAME_REPEAT,
            ship_frame_ticks: 1,
            assets_dir: PathBuf::from("assets"),
            show_obstacles: false,
        }
    }
}

impl SceneConfig {
    /// Defaults overridden by `SPACE_GARBAGE_*` environment variables.
    ///
    /// Unparseable values fall back to the default. Without `SPACE_GARBAGE_SEED` the seed is
    /// taken from the clock.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = parse_var("SPACE_GARBAGE_SEED").unwrap_or_else(clock_seed);
        let tick_ms = parse_var("SPACE_GARBAGE_TICK_MS")
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let stars = parse_var("SPACE_GARBAGE_STARS").unwrap_or(defaults.stars);
        let start_year = parse_var("SPACE_GARBAGE_START_YEAR").unwrap_or(defaults.start_year);

        let assets_dir = env::var("SPACE_GARBAGE_ASSETS")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
            .unwrap_or(defaults.assets_dir.clone());

        let show_obstacles = env::var("SPACE_GARBAGE_SHOW_OBSTACLES")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            tick_ms,
            stars,
            start_year,
            assets_dir,
            show_obstacles,
            ..defaults
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
