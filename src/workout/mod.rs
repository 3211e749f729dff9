pub mod record;
pub mod running;
pub mod swimming;
pub mod walking;

pub use self::record::WorkoutRecord;
pub use self::running::Running;
pub use self::swimming::Swimming;
pub use self::walking::SportsWalking;

use crate::consts::{LEN_STEP_WALK, M_IN_KM};
use crate::error::{FcResult, FitCalcError};
use crate::message::InfoMessage;
use std::fmt;

/// Derived values for one workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Metrics {
    pub fn is_finite(&self) -> bool {
        self.distance_km.is_finite()
            && self.mean_speed_kmh.is_finite()
            && self.calories_kcal.is_finite()
    }
}

/// Common calculator over a [`WorkoutRecord`].
///
/// Distance and speed have step-based defaults. Calories have no sensible
/// default: implementors must override [`Training::spent_calories`], and the
/// default reports [`FitCalcError::AbstractMethod`].
pub trait Training: fmt::Debug {
    fn record(&self) -> &WorkoutRecord;

    /// Label shown in the summary line.
    fn name(&self) -> &'static str;

    /// Metres covered per counted action.
    fn len_step(&self) -> f64 {
        LEN_STEP_WALK
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.record().action_count()) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.record().duration_hours()
    }

    /// Energy spent in kcal.
    fn spent_calories(&self) -> FcResult<f64> {
        Err(FitCalcError::AbstractMethod {
            workout: self.name().to_string(),
        })
    }

    /// Fails when any value leaves the finite range, e.g. a near-zero duration.
    fn metrics(&self) -> FcResult<Metrics> {
        let metrics = Metrics {
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories()?,
        };
        if metrics.is_finite() {
            Ok(metrics)
        } else {
            Err(FitCalcError::InvalidParameters(format!(
                "{} inputs produce non-finite metrics: {:?}",
                self.name(),
                metrics
            )))
        }
    }

    fn show_training_info(&self) -> FcResult<InfoMessage> {
        let metrics = self.metrics()?;
        Ok(InfoMessage::new(
            self.name(),
            self.record().duration_hours(),
            metrics,
        ))
    }
}

/// The bare record is the base workout: it knows distance and speed, but not calories.
impl Training for WorkoutRecord {
    fn record(&self) -> &WorkoutRecord {
        self
    }

    fn name(&self) -> &'static str {
        "Training"
    }
}
