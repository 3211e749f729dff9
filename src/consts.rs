/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour. Calorie formulas are per-minute.
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in metres.
pub const LEN_STEP_WALK: f64 = 0.65;

/// Distance covered by one swimming stroke, in metres.
pub const LEN_STEP_STROKE: f64 = 1.38;
