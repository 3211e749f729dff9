use super::{Training, WorkoutRecord};
use crate::consts::MIN_IN_H;
use crate::error::{FcResult, FitCalcError};
use crate::util::floor_div;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> FcResult<Self> {
        WorkoutRecord::new(action_count, duration_hours, weight_kg)?
            .with_height(height_cm)?
            .try_into()
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl TryFrom<WorkoutRecord> for SportsWalking {
    type Error = FitCalcError;

    fn try_from(record: WorkoutRecord) -> FcResult<Self> {
        let height_cm = record.height_cm().ok_or_else(|| {
            FitCalcError::InvalidParameters("sports walking requires a height".to_string())
        })?;
        Ok(Self { record, height_cm })
    }
}

impl Training for SportsWalking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    // speed²/height is floor-divided, so it contributes only in whole units.
    fn spent_calories(&self) -> FcResult<f64> {
        let rec = &self.record;
        let speed_term = floor_div(self.mean_speed().powi(2), self.height_cm);
        Ok((CALORIES_WEIGHT_MULTIPLIER * rec.weight_kg()
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * rec.weight_kg())
            * rec.duration_hours()
            * MIN_IN_H)
    }
}
