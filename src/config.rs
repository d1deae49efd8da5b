use std::path::PathBuf;

pub const MODEL_PATH_VAR: &str = "FARE_MODEL_PATH";
pub const DEFAULT_MODEL_PATH: &str = "random_forest_pipeline.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            window_title: "Uber Fare Prediction".to_string(),
            window_size: [420.0, 640.0],
        }
    }
}

impl AppConfig {
    /// Reads `FARE_MODEL_PATH` from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_path = lookup(MODEL_PATH_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH), PathBuf::from);

        Self {
            model_path,
            ..Self::default()
        }
    }
}
