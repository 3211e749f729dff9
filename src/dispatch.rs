use crate::error::{FcResult, FitCalcError};
use crate::workout::{Running, SportsWalking, Swimming, Training};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Workout type codes as they arrive from the sensor packages.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    SportsWalking,
}

type Constructor = fn(&[f64]) -> FcResult<Box<dyn Training>>;

impl WorkoutKind {
    /// Number of parameters a package of this kind must carry.
    pub fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }

    fn constructor(self) -> Constructor {
        match self {
            Self::Swimming => build_swimming,
            Self::Running => build_running,
            Self::SportsWalking => build_walking,
        }
    }

    pub fn build(self, params: &[f64]) -> FcResult<Box<dyn Training>> {
        if params.len() != self.arity() {
            return Err(arity_error(self, params.len()));
        }
        (self.constructor())(params)
    }
}

/// Resolves a workout code and its raw parameters into a calculator.
pub fn read_package(code: &str, params: &[f64]) -> FcResult<Box<dyn Training>> {
    let kind = WorkoutKind::from_str(code)
        .map_err(|_| FitCalcError::UnknownWorkoutType(code.to_string()))?;
    debug!("Package '{}' resolved to {:?} ({} params)", code, kind, params.len());
    kind.build(params)
}

fn build_swimming(params: &[f64]) -> FcResult<Box<dyn Training>> {
    let [action, duration, weight, pool_length, pool_laps]: [f64; 5] = params
        .try_into()
        .map_err(|_| arity_error(WorkoutKind::Swimming, params.len()))?;
    Ok(Box::new(Swimming::new(
        to_count("action", action)?,
        duration,
        weight,
        pool_length,
        to_count("pool laps", pool_laps)?,
    )?))
}

fn build_running(params: &[f64]) -> FcResult<Box<dyn Training>> {
    let [action, duration, weight]: [f64; 3] = params
        .try_into()
        .map_err(|_| arity_error(WorkoutKind::Running, params.len()))?;
    Ok(Box::new(Running::new(
        to_count("action", action)?,
        duration,
        weight,
    )?))
}

fn build_walking(params: &[f64]) -> FcResult<Box<dyn Training>> {
    let [action, duration, weight, height]: [f64; 4] = params
        .try_into()
        .map_err(|_| arity_error(WorkoutKind::SportsWalking, params.len()))?;
    Ok(Box::new(SportsWalking::new(
        to_count("action", action)?,
        duration,
        weight,
        height,
    )?))
}

fn arity_error(kind: WorkoutKind, got: usize) -> FitCalcError {
    FitCalcError::InvalidParameters(format!(
        "{} expects {} parameters, got {}",
        kind,
        kind.arity(),
        got
    ))
}

fn to_count(name: &str, value: f64) -> FcResult<u32> {
    let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
    if whole && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(FitCalcError::InvalidParameters(format!(
            "{} must be a whole non-negative number, got {}",
            name, value
        )))
    }
}
