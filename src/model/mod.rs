use crate::data::TripRecord;
use crate::error::PredictionError;

pub mod loader;
pub mod pipeline;

pub use loader::{ModelCache, load_model, load_pipeline};
pub use pipeline::FarePipeline;

/// Read-only fare estimator shared for the whole process.
pub trait FareModel: Send + Sync {
    fn predict(&self, record: &TripRecord) -> Result<f64, PredictionError>;
}
