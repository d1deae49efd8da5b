//! Trip fare prediction: a small egui form in front of a pre-trained
//! regression pipeline.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod predict;
pub mod visual;

use config::AppConfig;
use error::LoadError;
use model::ModelCache;
use predict::PredictionHandler;

/// Loads the configured model and wires it into a handler.
/// Nothing can be served if this fails; the caller reports the error.
pub fn bootstrap(config: &AppConfig) -> Result<PredictionHandler, LoadError> {
    ModelCache::new(&config.model_path)
        .get()
        .map(PredictionHandler::new)
}
