//! Report rendering: one line per workout.
//!
//! The text line is a fixed template. Field order, punctuation, and the
//! three-decimal fixed-point numbers are the same in every language;
//! only the labels change.

use serde::{Deserialize, Serialize};

use crate::model::Report;

/// Label set for the text template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,

    #[serde(rename = "ru")]
    Russian,
}

/// How each report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a report in the requested output format.
pub fn render(
    report: &Report,
    format: OutputFormat,
    language: Language,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, language)),
        OutputFormat::Json => render_json(report),
    }
}

/// The human-readable summary line.
pub fn render_text(report: &Report, language: Language) -> String {
    let Report {
        workout_type,
        duration_hours,
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    } = report;

    match language {
        Language::English => format!(
            "Workout type: {workout_type}; \
             Duration: {duration_hours:.3} h.; \
             Distance: {distance_km:.3} km; \
             Avg speed: {mean_speed_kmh:.3} km/h; \
             Calories spent: {calories_kcal:.3}."
        ),
        Language::Russian => format!(
            "Тип тренировки: {workout_type}; \
             Длительность: {duration_hours:.3} ч.; \
             Дистанция: {distance_km:.3} км; \
             Ср. скорость: {mean_speed_kmh:.3} км/ч; \
             Потрачено ккал: {calories_kcal:.3}."
        ),
    }
}

/// The report as a single-line JSON object.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
