//! Metric formulas: distance, mean speed, and calories per workout kind.
//!
//! Everything here is a pure function of raw sensor readings.
//! Callers guarantee non-zero divisors; see [`crate::dispatch`].

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in metres. Running and walking.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one stroke, in metres. Swimming.
pub const STROKE_LENGTH_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance in km for `action_count` steps or strokes of `length_m` each.
#[allow(clippy::cast_precision_loss)]
pub fn distance_km(action_count: i64, length_m: f64) -> f64 {
    action_count as f64 * length_m / M_IN_KM
}

/// Average speed over the whole session, in km/h.
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Swimming speed comes from pool geometry, not stroke count.
pub fn pool_speed_kmh(pool_length_m: f64, pool_laps: f64, duration_hours: f64) -> f64 {
    pool_length_m * pool_laps / M_IN_KM / duration_hours
}

pub fn duration_minutes(duration_hours: f64) -> f64 {
    duration_hours * MIN_IN_H
}

pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * mean_speed_kmh - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_minutes(duration_hours)
}

/// Calories for sports walking.
///
/// The squared speed is floor-divided by height in centimetres before scaling,
/// so for ordinary speeds the second term vanishes entirely.
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let speed_height = floor_div(mean_speed_kmh.powi(2), height_cm);
    (WALK_WEIGHT_MULTIPLIER * weight_kg + speed_height * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_minutes(duration_hours)
}

pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
}

/// Floating-point floor division.
///
/// Computed from the `fmod` remainder rather than `(a / b).floor()`, so that
/// quotients sitting just below an integer are not rounded up by the division
/// (`1.0 // 0.1 == 9.0`). `b` must be non-zero.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn step_distance() {
        assert!((distance_km(15_000, STEP_LENGTH_M) - 9.75).abs() < EPS);
        assert!((distance_km(720, STROKE_LENGTH_M) - 0.9936).abs() < EPS);
        assert!(distance_km(0, STEP_LENGTH_M).abs() < EPS);
    }

    #[test]
    fn pool_speed_ignores_strokes() {
        assert!((pool_speed_kmh(25.0, 40.0, 1.0) - 1.0).abs() < EPS);
        assert!((pool_speed_kmh(50.0, 20.0, 0.5) - 2.0).abs() < EPS);
    }

    #[test]
    fn running_formula() {
        let kcal = running_calories(9.75, 75.0, 1.0);
        assert!((kcal - 699.75).abs() < EPS);
    }

    #[test]
    fn running_below_threshold_speed_goes_negative() {
        // 18 * 1 - 20 < 0; no clamping.
        assert!(running_calories(1.0, 70.0, 1.0) < 0.0);
    }

    #[test]
    fn walking_formula_drops_speed_term_below_height() {
        let kcal = walking_calories(5.85, 75.0, 180.0, 1.0);
        assert!((kcal - 157.5).abs() < EPS);
    }

    #[test]
    fn walking_formula_keeps_whole_quotient() {
        // 20^2 = 400, 400 // 180 = 2.
        let kcal = walking_calories(20.0, 75.0, 180.0, 1.0);
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        assert!((kcal - expected).abs() < EPS);
    }

    #[test]
    fn swimming_formula() {
        let kcal = swimming_calories(1.0, 80.0);
        assert!((kcal - 336.0).abs() < EPS);
    }

    #[test]
    fn floor_div_matches_fmod_semantics() {
        assert_eq!(floor_div(34.2225, 180.0).to_bits(), 0.0_f64.to_bits());
        assert!((floor_div(400.0, 180.0) - 2.0).abs() < EPS);
        assert!((floor_div(1.0, 0.1) - 9.0).abs() < EPS);
        assert!((floor_div(-7.0, 2.0) + 4.0).abs() < EPS);
        assert!((floor_div(7.0, -2.0) + 4.0).abs() < EPS);
    }

    #[test]
    fn floor_div_zero_keeps_sign() {
        assert!(floor_div(-0.0, 180.0).is_sign_negative());
        assert!(floor_div(1.0, 180.0).is_sign_positive());
        assert!((floor_div(-1.0, 180.0) + 1.0).abs() < EPS);
    }
}
