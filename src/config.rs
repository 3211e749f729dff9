use crate::error::FcResult;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::Display;

/// Options for a batch of packages.
#[derive(Args, Debug, Clone, Default)]
pub struct RunConfig {
    /// JSON array of packages to process instead of the built-in samples
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Stop at the first package that fails
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

#[derive(ValueEnum, Display, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Table,
    Json,
}

/// One sensor reading: workout code plus its positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub params: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: &str, params: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            params: params.to_vec(),
        }
    }
}

/// The readings processed when no input file is given.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", &[15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn load_packages_from_file<P: AsRef<Path>>(path: P) -> FcResult<Vec<WorkoutPackage>> {
    let content = fs::read_to_string(path)?;
    let packages = serde_json::from_str(&content)?;
    Ok(packages)
}

impl RunConfig {
    pub fn packages(&self) -> FcResult<Vec<WorkoutPackage>> {
        match &self.input {
            Some(path) => load_packages_from_file(path),
            None => Ok(sample_packages()),
        }
    }
}
