use super::FareModel;
use super::pipeline::FarePipeline;
use crate::error::LoadError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Reads and checks a pipeline artifact.
pub fn load_pipeline<P: AsRef<Path>>(path: P) -> Result<FarePipeline, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::MissingArtifact(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let pipeline: FarePipeline =
        serde_json::from_reader(reader).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    pipeline
        .validate()
        .map_err(|reason| LoadError::InvalidArtifact {
            path: path.to_path_buf(),
            reason,
        })?;

    info!(
        path = %path.display(),
        estimator = pipeline.estimator.kind(),
        trees = pipeline.estimator.tree_count(),
        scaled = pipeline.scaler.is_some(),
        "Loaded fare model"
    );

    Ok(pipeline)
}

pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Arc<dyn FareModel>, LoadError> {
    Ok(Arc::new(load_pipeline(path)?))
}

/// Loads the model on first use and hands out the same handle afterwards.
pub struct ModelCache {
    path: PathBuf,
    model: OnceLock<Arc<dyn FareModel>>,
}

impl ModelCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            model: OnceLock::new(),
        }
    }

    /// A failed load is not remembered; the next call reads the file again.
    pub fn get(&self) -> Result<Arc<dyn FareModel>, LoadError> {
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }

        let model = load_model(&self.path)?;
        Ok(Arc::clone(self.model.get_or_init(|| model)))
    }
}
