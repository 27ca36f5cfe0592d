mod classifier;
mod error;
mod estimator;
mod explanation;
mod factors;
mod pass_rate;
mod sensor;
mod types;

pub use classifier::classify;
pub use error::FeasibilityError;
pub use estimator::{calculate_feasibility, parse_window_date, try_calculate_feasibility};
pub use explanation::{explain, latitude_description};
pub use factors::{air_traffic_factor, latitude_factor};
pub use pass_rate::expected_passes;
pub use sensor::{LevelThresholds, SensorProfile, SensorType};
pub use types::{FeasibilityLevel, FeasibilityResult};
