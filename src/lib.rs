//! Food delivery time prediction front end.
//!
//! Collects one delivery's attributes, one-hot encodes them into the
//! 29-column layout the regressor was trained on, and reports the
//! predicted time in minutes.

pub mod collector;
pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod predictor;
pub mod schema;
pub mod types;

pub use collector::InputCollector;
pub use config::AppConfig;
pub use encoder::{encode, encode_for_schema, EncodedFeatureVector, OneHot};
pub use error::{PredictorError, Result};
pub use model::{LinearModel, Model, Regressor};
pub use predictor::{format_prediction, Predictor};
pub use schema::{FeatureSchema, Slot, FEATURE_COUNT, TRAINING_COLUMNS};
pub use types::RawDeliveryInput;
