use serde::Deserialize;
use std::fs;

use crate::error::{PredictorError, Result};

pub const DEFAULT_MODEL_PATH: &str = "delivery_time_model.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub model_path: String,
    pub meta_path: Option<String>,
    /// Read one request from this JSON file instead of prompting.
    pub input_path: Option<String>,
    /// Log a summary of every encoded vector.
    pub log_predictions: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            meta_path: None,
            input_path: None,
            log_predictions: false,
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| PredictorError::Config(format!("failed to read {path}: {e}")))?;
        serde_json::from_str(&data)
            .map_err(|e| PredictorError::Config(format!("invalid config JSON in {path}: {e}")))
    }

    /// `CONFIG_PATH` file (if any) with `MODEL_PATH`, `META_PATH`,
    /// `INPUT_PATH` and `LOG_PRED` layered on top.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|k| std::env::var(k).ok())
    }

    pub fn resolve<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match var("CONFIG_PATH") {
            Some(p) => Self::load(&p)?,
            None => Self::default(),
        };
        if let Some(p) = var("MODEL_PATH") {
            cfg.model_path = p;
        }
        if let Some(p) = var("META_PATH") {
            cfg.meta_path = Some(p);
        }
        if let Some(p) = var("INPUT_PATH") {
            cfg.input_path = Some(p);
        }
        if let Some(v) = var("LOG_PRED") {
            cfg.log_predictions = v == "1";
        }
        Ok(cfg)
    }
}
