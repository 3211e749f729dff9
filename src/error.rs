use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitCalcError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown workout type: '{0}'")]
    UnknownWorkoutType(String),

    #[error("Invalid Parameters: {0}")]
    InvalidParameters(String),

    #[error("Calorie calculation is not defined for '{workout}'")]
    AbstractMethod { workout: String },
}

pub type FcResult<T> = Result<T, FitCalcError>;
