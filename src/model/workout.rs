//! Workout variants and their derived metrics.

use crate::dispatch::WorkoutError;
use crate::metrics;

use super::{Report, WorkoutCode};

/// Readings every workout carries.
///
/// `duration_hours` is always finite and non-zero: it divides the distance
/// in every mean-speed formula. [`Session::new`] is the only way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    action_count: i64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Session {
    pub fn new(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        if !duration_hours.is_finite() || duration_hours == 0.0 {
            return Err(WorkoutError::InvalidDuration(duration_hours));
        }
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

/// Sports walking. Height enters the calorie formula as a divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(session: Session, height_cm: f64) -> Result<Self, WorkoutError> {
        if !height_cm.is_finite() || height_cm == 0.0 {
            return Err(WorkoutError::InvalidHeight(height_cm));
        }
        Ok(Self { session, height_cm })
    }
}

/// One recorded workout.
///
/// Immutable once built; every metric is recomputed from the raw
/// readings on request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Self::Swimming(_) => WorkoutCode::Swimming,
            Self::Running(_) => WorkoutCode::Running,
            Self::SportsWalking(_) => WorkoutCode::SportsWalking,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Self::Swimming(w) => &w.session,
            Self::Running(w) => &w.session,
            Self::SportsWalking(w) => &w.session,
        }
    }

    /// Length of one step or stroke in metres.
    fn action_length_m(&self) -> f64 {
        match self {
            Self::Swimming(_) => metrics::STROKE_LENGTH_M,
            Self::Running(_) | Self::SportsWalking(_) => metrics::STEP_LENGTH_M,
        }
    }

    /// Distance from the action count. For swimming this is the stroke
    /// distance, which does not feed the speed.
    pub fn distance_km(&self) -> f64 {
        metrics::distance_km(self.session().action_count, self.action_length_m())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(w) => {
                metrics::pool_speed_kmh(w.pool_length_m, w.pool_laps, w.session.duration_hours)
            }
            Self::Running(_) | Self::SportsWalking(_) => {
                metrics::mean_speed_kmh(self.distance_km(), self.session().duration_hours)
            }
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Swimming(w) => metrics::swimming_calories(speed, w.session.weight_kg),
            Self::Running(w) => {
                metrics::running_calories(speed, w.session.weight_kg, w.session.duration_hours)
            }
            Self::SportsWalking(w) => metrics::walking_calories(
                speed,
                w.session.weight_kg,
                w.height_cm,
                w.session.duration_hours,
            ),
        }
    }

    /// Evaluate every metric into a report.
    pub fn report(&self) -> Report {
        Report {
            workout_type: self.code().display_name(),
            duration_hours: self.session().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
