//! Ship velocity model.
//!
//! Speeds are in cells per tick. Every tick both speeds fade, then each axis with input is pushed
//! towards the input direction. The push shrinks as the speed approaches the limit.

use crate::types::{SHIP_FADING, SHIP_SPEED_LIMIT};

/// Speeds below this magnitude after an acceleration are treated as a stop.
const STOP_THRESHOLD: f64 = 0.1;

/// Acceleration scale applied on top of the cosine falloff.
const ACCELERATION: f64 = 0.75;

/// Tunables for [`update_speed_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub row_limit: f64,
    pub column_limit: f64,
    /// Fraction of speed kept every tick, in `[0, 1]`.
    pub fading: f64,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            row_limit: SHIP_SPEED_LIMIT,
            column_limit: SHIP_SPEED_LIMIT,
            fading: SHIP_FADING,
        }
    }
}

/// Next `(row_speed, column_speed)` for one tick of input, with the default limits.
///
/// # Examples
///
/// ```
/// use space_garbage_core::update_speed;
///
/// assert_eq!(update_speed(0.0, 0.0, 0, 0), (0.0, 0.0));
///
/// let (row, column) = update_speed(0.0, 0.0, -1, 0);
/// assert!(row < 0.0);
/// assert_eq!(column, 0.0);
/// ```
pub fn update_speed(
    row_speed: f64,
    column_speed: f64,
    row_input: i8,
    column_input: i8,
) -> (f64, f64) {
    update_speed_with(
        row_speed,
        column_speed,
        row_input,
        column_input,
        SpeedLimits::default(),
    )
}

pub fn update_speed_with(
    row_speed: f64,
    column_speed: f64,
    row_input: i8,
    column_input: i8,
    limits: SpeedLimits,
) -> (f64, f64) {
    let fading = limits.fading.clamp(0.0, 1.0);
    let mut row_speed = row_speed * fading;
    let mut column_speed = column_speed * fading;

    if row_input != 0 {
        row_speed = accelerate(row_speed, limits.row_limit, row_input > 0);
    }
    if column_input != 0 {
        column_speed = accelerate(column_speed, limits.column_limit, column_input > 0);
    }

    (row_speed, column_speed)
}

fn accelerate(speed: f64, limit: f64, forward: bool) -> f64 {
    let limit = limit.abs();
    if limit == 0.0 {
        return 0.0;
    }

    let delta = (speed / limit).cos() * ACCELERATION;
    let next = if forward { speed + delta } else { speed - delta };
    let next = next.clamp(-limit, limit);

    if next.abs() < STOP_THRESHOLD {
        0.0
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_at_rest_stays_at_rest() {
        let mut speed = (0.0, 0.0);
        for _ in 0..10 {
            speed = update_speed(speed.0, speed.1, 0, 0);
            assert_eq!(speed, (0.0, 0.0));
        }
    }

    #[test]
    fn input_accelerates_in_its_direction() {
        let (row, column) = update_speed(0.0, 0.0, 1, -1);
        assert!((row - 0.75).abs() < 1e-9);
        assert!((column + 0.75).abs() < 1e-9);
    }

    #[test]
    fn speed_never_exceeds_limit() {
        let mut speed = (0.0, 0.0);
        for _ in 0..100 {
            speed = update_speed(speed.0, speed.1, 1, 1);
            assert!(speed.0 <= SHIP_SPEED_LIMIT && speed.1 <= SHIP_SPEED_LIMIT);
        }
        assert!(speed.0 > 1.0);
    }

    #[test]
    fn idle_decays_towards_zero_without_overshoot() {
        let mut speed = (2.0, -2.0);
        let mut previous = speed;
        for _ in 0..50 {
            speed = update_speed(speed.0, speed.1, 0, 0);
            assert!(speed.0 >= 0.0 && speed.0 < previous.0);
            assert!(speed.1 <= 0.0 && speed.1 > previous.1);
            previous = speed;
        }
        assert!(speed.0 < 0.01);
    }

    #[test]
    fn reversing_input_brakes_first() {
        let (_, column) = update_speed(0.0, 2.0, 0, -1);
        assert!(column < 2.0 * SHIP_FADING);
        assert!(column > 0.0);
    }

    #[test]
    fn zero_limit_pins_axis() {
        let limits = SpeedLimits {
            row_limit: 0.0,
            ..SpeedLimits::default()
        };
        assert_eq!(update_speed_with(0.0, 0.0, 1, 0, limits).0, 0.0);
    }
}
