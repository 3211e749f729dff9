use super::{Training, WorkoutRecord};
use crate::consts::{LEN_STEP_STROKE, M_IN_KM};
use crate::error::{FcResult, FitCalcError};

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming. Speed comes from pool geometry, not from stroke count.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> FcResult<Self> {
        WorkoutRecord::new(action_count, duration_hours, weight_kg)?
            .with_pool(pool_length_m, pool_laps)?
            .try_into()
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl TryFrom<WorkoutRecord> for Swimming {
    type Error = FitCalcError;

    fn try_from(record: WorkoutRecord) -> FcResult<Self> {
        match (record.pool_length_m(), record.pool_laps()) {
            (Some(pool_length_m), Some(pool_laps)) => Ok(Self {
                record,
                pool_length_m,
                pool_laps,
            }),
            _ => Err(FitCalcError::InvalidParameters(
                "swimming requires pool length and lap count".to_string(),
            )),
        }
    }
}

impl Training for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        LEN_STEP_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.record.duration_hours()
    }

    fn spent_calories(&self) -> FcResult<f64> {
        Ok(
            (self.mean_speed() + CALORIES_SPEED_SHIFT)
                * CALORIES_WEIGHT_MULTIPLIER
                * self.record.weight_kg(),
        )
    }
}
