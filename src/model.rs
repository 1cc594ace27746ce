use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{PredictorError, Result};
use crate::schema::FeatureSchema;

/// A trained regressor behind a single forward call.
///
/// Implementations are read-only after load and may be shared freely.
pub trait Regressor {
    fn in_dim(&self) -> usize;

    fn predict(&self, x: &[f32]) -> Result<f32>;

    fn check_len(&self, x: &[f32]) -> Result<()> {
        if x.len() != self.in_dim() {
            return Err(PredictorError::FeatureLength {
                got: x.len(),
                expected: self.in_dim(),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[cfg_attr(not(feature = "torch"), allow(dead_code))]
struct MetaJson {
    feat_list: Vec<String>,
    in_dim: Option<usize>,
}

#[derive(Deserialize)]
struct LinearJson {
    intercept: f64,
    coefficients: HashMap<String, f64>,
    #[serde(default)]
    feat_list: Option<Vec<String>>,
}

/// Ordinary least-squares style model exported as JSON coefficients.
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, weights: Vec<f64>) -> Self {
        Self { intercept, weights }
    }

    /// Parse a coefficient file. Columns without a coefficient weigh 0.
    pub fn from_json(txt: &str) -> Result<(Self, FeatureSchema)> {
        let raw: LinearJson = serde_json::from_str(txt)?;
        let schema = match raw.feat_list {
            Some(list) => FeatureSchema::new(list),
            None => FeatureSchema::training(),
        };

        let mut weights = vec![0.0; schema.len()];
        for (name, w) in &raw.coefficients {
            let idx = schema
                .position(name)
                .ok_or_else(|| {
                    PredictorError::Meta(format!("coefficient for unknown column {name:?}"))
                })?;
            weights[idx] = *w;
        }

        Ok((Self::new(raw.intercept, weights), schema))
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Regressor for LinearModel {
    fn in_dim(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, x: &[f32]) -> Result<f32> {
        self.check_len(x)?;
        let y = self
            .weights
            .iter()
            .zip(x)
            .fold(self.intercept, |acc, (w, v)| acc + w * f64::from(*v));
        Ok(y as f32)
    }
}

#[cfg(feature = "torch")]
pub use torch::TorchModel;

#[cfg(feature = "torch")]
mod torch {
    use tch::{kind::Kind, CModule, Device, Tensor};

    use super::Regressor;
    use crate::error::{PredictorError, Result};

    fn forward_err(e: tch::TchError) -> PredictorError {
        PredictorError::Forward(e.to_string())
    }

    /// TorchScript regressor: `[1, in_dim]` float input, one scalar out.
    pub struct TorchModel {
        model: CModule,
        device: Device,
        in_dim: usize,
    }

    impl TorchModel {
        pub fn load(model_path: &str, in_dim: usize) -> Result<Self> {
            let device = Device::Cpu;
            let model = CModule::load_on_device(model_path, device).map_err(|e| {
                PredictorError::ModelLoad {
                    path: model_path.to_string(),
                    reason: e.to_string(),
                }
            })?;

            // Probe output shape with a dummy forward; expect a single value
            let dummy = Tensor::zeros([1, in_dim as i64], (Kind::Float, device));
            let t = model.forward_ts(&[dummy]).map_err(forward_err)?;
            if t.numel() != 1 {
                return Err(PredictorError::ModelLoad {
                    path: model_path.to_string(),
                    reason: format!("unexpected model output size: {:?}", t.size()),
                });
            }

            Ok(Self { model, device, in_dim })
        }
    }

    impl Regressor for TorchModel {
        fn in_dim(&self) -> usize {
            self.in_dim
        }

        fn predict(&self, x: &[f32]) -> Result<f32> {
            self.check_len(x)?;
            let input = Tensor::from_slice(x)
                .reshape([1, self.in_dim as i64])
                .to_device(self.device);
            let t = self.model.forward_ts(&[input]).map_err(forward_err)?;
            let y = t.to_kind(Kind::Double).reshape([-1]).double_value(&[0]);
            Ok(y as f32)
        }
    }
}

/// Any model artifact the front end knows how to load.
pub enum Model {
    Linear(LinearModel),
    #[cfg(feature = "torch")]
    Torch(TorchModel),
}

impl Model {
    /// Load the model artifact and the column order it was trained on.
    ///
    /// `.pt`/`.ts` files are TorchScript and need `meta_path`; anything else
    /// is read as a linear coefficient file.
    pub fn load(model_path: &str, meta_path: Option<&str>) -> Result<(Self, FeatureSchema)> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(PredictorError::ModelNotFound(path.to_path_buf()));
        }

        let is_torchscript = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("pt") | Some("ts")
        );

        let (model, schema) = if is_torchscript {
            Self::load_torchscript(model_path, meta_path)?
        } else {
            let txt = fs::read_to_string(path)?;
            let (m, schema) =
                LinearModel::from_json(&txt).map_err(|e| PredictorError::ModelLoad {
                    path: model_path.to_string(),
                    reason: e.to_string(),
                })?;
            (Model::Linear(m), schema)
        };

        if !schema.matches_training() {
            warn!(
                "model feat_list ({} cols) differs from training columns; \
                 unknown={:?} missing={:?}",
                schema.len(),
                schema.unknown_columns(),
                schema.missing_columns()
            );
        }
        info!("loaded model {} in_dim={}", model_path, model.in_dim());
        Ok((model, schema))
    }

    #[cfg(feature = "torch")]
    fn load_torchscript(
        model_path: &str,
        meta_path: Option<&str>,
    ) -> Result<(Self, FeatureSchema)> {
        let schema = match meta_path {
            Some(p) => {
                let meta = read_meta(p)?;
                let in_dim = meta.in_dim.unwrap_or(meta.feat_list.len());
                if in_dim != meta.feat_list.len() {
                    warn!(
                        "meta.in_dim ({}) != feat_list.len() ({}); using feat_list.len()",
                        in_dim,
                        meta.feat_list.len()
                    );
                }
                FeatureSchema::new(meta.feat_list)
            }
            None => FeatureSchema::training(),
        };
        let m = TorchModel::load(model_path, schema.len())?;
        Ok((Model::Torch(m), schema))
    }

    #[cfg(not(feature = "torch"))]
    fn load_torchscript(
        model_path: &str,
        meta_path: Option<&str>,
    ) -> Result<(Self, FeatureSchema)> {
        if let Some(p) = meta_path {
            read_meta(p)?;
        }
        Err(PredictorError::ModelLoad {
            path: model_path.to_string(),
            reason: "TorchScript support not compiled in; rebuild with --features torch".into(),
        })
    }
}

fn read_meta(meta_path: &str) -> Result<MetaJson> {
    let meta_txt = fs::read_to_string(Path::new(meta_path))
        .map_err(|e| PredictorError::Meta(format!("failed to read meta at {meta_path}: {e}")))?;
    let meta: MetaJson = serde_json::from_str(&meta_txt)
        .map_err(|e| PredictorError::Meta(format!("failed to parse {meta_path}: {e}")))?;
    if meta.feat_list.is_empty() {
        return Err(PredictorError::Meta("feat_list is empty".into()));
    }
    Ok(meta)
}

impl Regressor for Model {
    fn in_dim(&self) -> usize {
        match self {
            Model::Linear(m) => m.in_dim(),
            #[cfg(feature = "torch")]
            Model::Torch(m) => m.in_dim(),
        }
    }

    fn predict(&self, x: &[f32]) -> Result<f32> {
        match self {
            Model::Linear(m) => m.predict(x),
            #[cfg(feature = "torch")]
            Model::Torch(m) => m.predict(x),
        }
    }
}
