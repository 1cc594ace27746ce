use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use delivery_predictor::collector::{load_request, InputCollector};
use delivery_predictor::{format_prediction, AppConfig, Model, Predictor, PredictorError};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = AppConfig::from_env().context("failed to load config")?;

    // No model, no form: stop before any input is collected
    let (mdl, schema) = match Model::load(&cfg.model_path, cfg.meta_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e @ PredictorError::ModelNotFound(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("failed to load model"),
    };
    let predictor = Predictor::new(mdl, schema).with_vector_logging(cfg.log_predictions);

    if let Some(path) = cfg.input_path.as_deref() {
        let raw = load_request(path).with_context(|| format!("bad request file {path}"))?;
        let minutes = predictor.predict(&raw)?;
        println!("{}", format_prediction(minutes));
        return Ok(());
    }

    println!("Food Delivery Time Prediction");
    println!("Enter the details of the delivery to predict the time it will take.");

    let stdin = io::stdin();
    let mut form = InputCollector::new(stdin.lock(), io::stdout());
    loop {
        let raw = form.collect()?;
        let minutes = predictor.predict(&raw)?;
        println!("\n{}", format_prediction(minutes));
        io::stdout().flush()?;
        if !form.confirm("Predict another delivery?")? {
            break;
        }
    }
    Ok(())
}
