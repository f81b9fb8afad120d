//! Core data model: workout codes, workout variants, and metric reports.

mod code;
mod report;
mod workout;

pub use code::{UnknownCode, WorkoutCode};
pub use report::Report;
pub use workout::{Running, Session, SportsWalking, Swimming, Workout};
