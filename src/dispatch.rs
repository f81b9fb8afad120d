//! Dispatch: turn a raw sensor package into a workout.
//!
//! A package is a code plus an ordered list of numbers. The code picks
//! the variant and fixes how many numbers it needs; the numbers fill
//! the variant's fields in order.

use tracing::debug;

use crate::model::{
    Running, Session, SportsWalking, Swimming, UnknownCode, Workout, WorkoutCode,
};

/// Errors that can occur while building a workout from a package.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("unknown workout type: '{0}' (expected SWM, RUN, or WLK)")]
    UnknownWorkoutType(String),

    #[error("{code} takes {expected} parameters, got {actual}")]
    ArityMismatch {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },

    #[error("action count must be a whole number, got {0}")]
    InvalidActionCount(f64),

    #[error("duration must be finite and non-zero, got {0}")]
    InvalidDuration(f64),

    #[error("height must be finite and non-zero, got {0}")]
    InvalidHeight(f64),
}

pub type Result<T> = core::result::Result<T, WorkoutError>;

/// Build a workout from a code and its raw parameters.
///
/// Parameters are positional:
///
/// - `SWM`: action, duration (h), weight (kg), pool length (m), pool laps
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
pub fn construct(code: &str, params: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code
        .parse()
        .map_err(|UnknownCode(tag)| WorkoutError::UnknownWorkoutType(tag))?;

    if params.len() != code.arity() {
        return Err(WorkoutError::ArityMismatch {
            code,
            expected: code.arity(),
            actual: params.len(),
        });
    }

    let session = Session::new(action_count(params[0])?, params[1], params[2])?;
    let workout = match code {
        WorkoutCode::Swimming => Workout::Swimming(Swimming {
            session,
            pool_length_m: params[3],
            pool_laps: params[4],
        }),
        WorkoutCode::Running => Workout::Running(Running { session }),
        WorkoutCode::SportsWalking => {
            Workout::SportsWalking(SportsWalking::new(session, params[3])?)
        }
    };

    debug!(%code, ?params, "constructed workout");
    Ok(workout)
}

/// Counts arrive as plain numbers; accept only whole ones that fit in `i64`.
///
/// Sign is not checked. `i64::MAX as f64` rounds up to 2^63, so the upper
/// bound is exclusive.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn action_count(raw: f64) -> Result<i64> {
    if raw.is_finite()
        && raw.fract() == 0.0
        && raw >= i64::MIN as f64
        && raw < i64::MAX as f64
    {
        Ok(raw as i64)
    } else {
        Err(WorkoutError::InvalidActionCount(raw))
    }
}
