use crate::error::{FcResult, FitCalcError};

/// Raw sensor readings for one workout session.
///
/// Built through [`WorkoutRecord::new`] plus the `with_*` extenders, each of
/// which validates its inputs. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: Option<f64>,
    pool_length_m: Option<f64>,
    pool_laps: Option<u32>,
}

impl WorkoutRecord {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> FcResult<Self> {
        ensure_positive("duration", duration_hours)?;
        ensure_positive("weight", weight_kg)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: None,
            pool_length_m: None,
            pool_laps: None,
        })
    }

    pub fn with_height(mut self, height_cm: f64) -> FcResult<Self> {
        ensure_positive("height", height_cm)?;
        self.height_cm = Some(height_cm);
        Ok(self)
    }

    pub fn with_pool(mut self, pool_length_m: f64, pool_laps: u32) -> FcResult<Self> {
        ensure_positive("pool length", pool_length_m)?;
        if pool_laps == 0 {
            return Err(FitCalcError::InvalidParameters(
                "pool laps must be greater than zero".to_string(),
            ));
        }
        self.pool_length_m = Some(pool_length_m);
        self.pool_laps = Some(pool_laps);
        Ok(self)
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn pool_length_m(&self) -> Option<f64> {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> Option<u32> {
        self.pool_laps
    }
}

fn ensure_positive(name: &str, value: f64) -> FcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitCalcError::InvalidParameters(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
