use super::{Training, WorkoutRecord};
use crate::consts::{MIN_IN_H, M_IN_KM};
use crate::error::FcResult;

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> FcResult<Self> {
        Ok(Self::from(WorkoutRecord::new(
            action_count,
            duration_hours,
            weight_kg,
        )?))
    }
}

impl From<WorkoutRecord> for Running {
    fn from(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn name(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> FcResult<f64> {
        let rec = &self.record;
        Ok(
            (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SHIFT)
                * rec.weight_kg()
                / M_IN_KM
                * rec.duration_hours()
                * MIN_IN_H,
        )
    }
}
