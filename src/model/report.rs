//! Metrics report: the finished numbers for one workout.

use serde::Serialize;

/// Snapshot of every derived metric for a single workout.
///
/// Built once by [`super::Workout::report`], consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub workout_type: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
