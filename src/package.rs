//! Sensor packages: raw `(code, numbers)` pairs awaiting dispatch.
//!
//! Packages come from the built-in reference set or from a file:
//!
//! ```toml
//! [[package]]
//! code = "SWM"
//! data = [720, 1, 80, 25, 40]
//! ```
//!
//! JSON files use the same shape (`{"package": [...]}`) or a bare array.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Errors that can occur while loading a package file.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported package file '{0}': expected .toml or .json")]
    UnsupportedFormat(String),
}

pub type Result<T> = core::result::Result<T, PackageError>;

/// One raw reading from a sensor: a workout code and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}

#[derive(Deserialize)]
struct PackageFile {
    #[serde(default)]
    package: Vec<Package>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPackages {
    Table(PackageFile),
    List(Vec<Package>),
}

/// The packages reported when no input is given.
pub fn reference_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15_000.0, 1.0, 75.0]),
        Package::new("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a `.toml` or `.json` file, preserving file order.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let packages = match extension.as_deref() {
        Some("toml") => parse_toml(&fs::read_to_string(path)?)?,
        Some("json") => parse_json(&fs::read_to_string(path)?)?,
        _ => return Err(PackageError::UnsupportedFormat(path.display().to_string())),
    };

    info!(path = %path.display(), count = packages.len(), "loaded packages");
    Ok(packages)
}

fn parse_toml(contents: &str) -> Result<Vec<Package>> {
    let file: PackageFile = toml::from_str(contents)?;
    Ok(file.package)
}

fn parse_json(contents: &str) -> Result<Vec<Package>> {
    let parsed: JsonPackages = serde_json::from_str(contents)?;
    let packages = match parsed {
        JsonPackages::Table(file) => file.package,
        JsonPackages::List(list) => list,
    };
    Ok(packages)
}
