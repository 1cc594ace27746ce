use tracing::info;

use crate::encoder::encode_for_schema;
use crate::error::Result;
use crate::model::Regressor;
use crate::schema::FeatureSchema;
use crate::types::RawDeliveryInput;

/// Loaded model plus the column order it expects.
pub struct Predictor<M> {
    model: M,
    schema: FeatureSchema,
    log_vectors: bool,
}

impl<M: Regressor> Predictor<M> {
    pub fn new(model: M, schema: FeatureSchema) -> Self {
        Self {
            model,
            schema,
            log_vectors: false,
        }
    }

    pub fn with_vector_logging(mut self, on: bool) -> Self {
        self.log_vectors = on;
        self
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Encode → predict. Returns minutes.
    pub fn predict(&self, raw: &RawDeliveryInput) -> Result<f32> {
        let vec = encode_for_schema(raw, &self.schema);
        if self.log_vectors {
            self.log_vector(&vec);
        }
        self.model.predict(&vec)
    }

    // Summary so an all-zero or misaligned vector shows up in the logs
    fn log_vector(&self, vec: &[f32]) {
        let nz = vec.iter().filter(|x| **x != 0.0).count();
        let mean = if vec.is_empty() { 0.0 } else { vec.iter().sum::<f32>() / (vec.len() as f32) };
        let std = if vec.len() < 2 {
            0.0
        } else {
            (vec.iter().map(|x| (x - mean) * (x - mean)).sum::<f32>() / (vec.len() as f32)).sqrt()
        };
        let sample: Vec<String> = self
            .schema
            .columns()
            .iter()
            .zip(vec)
            .take(6)
            .map(|(name, v)| format!("{}={:.3}", name, v))
            .collect();
        info!(
            "encoded in_dim={} nonzero={} mean={:.3} std={:.3} sample=[{}]",
            vec.len(),
            nz,
            mean,
            std,
            sample.join(", ")
        );
    }
}

pub fn format_prediction(minutes: f32) -> String {
    format!("Predicted delivery time is: {:.2} minutes", minutes)
}
