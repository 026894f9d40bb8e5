pub mod data;
pub mod error;
pub mod plot;
pub mod regression;

pub use data::{Point, PointSet};
pub use error::{FitErr, Result};
pub use regression::{LinearModel, RegressionConfig};
