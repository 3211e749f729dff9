pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod util;
pub mod workout;

pub use self::dispatch::{read_package, WorkoutKind};
pub use self::error::{FcResult, FitCalcError};
pub use self::message::InfoMessage;
pub use self::workout::{Metrics, Running, SportsWalking, Swimming, Training, WorkoutRecord};
