//! Terminal form that gathers one [`RawDeliveryInput`].
//!
//! Every control is bounded: numbers are clamped into range and selectors
//! only accept listed options, so the collector never hands out-of-domain
//! values to the encoder.

use std::fs;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{PredictorError, Result};
use crate::types::{
    Choice, City, Festival, FloatBound, IntBound, OrderType, RawDeliveryInput, Traffic,
    VehicleType, Weather, AGE, DAY_OF_MONTH, DAY_OF_WEEK, DISTANCE_KM, MULTIPLE_DELIVERIES,
    ORDER_HOUR, RATINGS, VEHICLE_CONDITION,
};

pub struct InputCollector<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Run the whole form in the order the operator sees it.
    pub fn collect(&mut self) -> Result<RawDeliveryInput> {
        self.header("Delivery Person & Vehicle")?;
        let delivery_person_age = self.read_int(&AGE)?;
        let delivery_person_ratings = self.read_float(&RATINGS)?;
        let vehicle_condition = self.read_int(&VEHICLE_CONDITION)?;
        let multiple_deliveries = self.read_int(&MULTIPLE_DELIVERIES)?;

        self.header("Order & Environment")?;
        let distance_km = self.read_float(&DISTANCE_KM)?;
        let order_hour = self.read_int(&ORDER_HOUR)?;
        let order_day_of_week = self.read_int(&DAY_OF_WEEK)?;
        let order_day_of_month = self.read_int(&DAY_OF_MONTH)?;
        let weather_conditions = self.select::<Weather>()?;
        let traffic_density = self.select::<Traffic>()?;
        let order_type = self.select::<OrderType>()?;
        let vehicle_type = self.select::<VehicleType>()?;
        let festival = self.select::<Festival>()?;
        let city = self.select::<City>()?;

        let raw = RawDeliveryInput {
            delivery_person_age,
            delivery_person_ratings,
            vehicle_condition,
            multiple_deliveries,
            distance_km,
            order_hour,
            order_day_of_week,
            order_day_of_month,
            weather_conditions,
            traffic_density,
            order_type,
            vehicle_type,
            festival,
            city,
        };
        debug!(?raw, "collected input");
        Ok(raw)
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n== {title} ==")?;
        Ok(())
    }

    pub fn read_int(&mut self, bound: &IntBound) -> Result<i32> {
        loop {
            let prompt = format!(
                "{} [{}-{}] ({}): ",
                bound.title, bound.min, bound.max, bound.default
            );
            let line = self.prompt(&prompt)?;
            if line.is_empty() {
                return Ok(bound.default);
            }
            match line.parse::<f64>() {
                Ok(v) if !v.is_nan() => {
                    let clamped =
                        v.round().clamp(f64::from(bound.min), f64::from(bound.max)) as i32;
                    if f64::from(clamped) != v {
                        writeln!(self.out, "  using {clamped}")?;
                    }
                    return Ok(clamped);
                }
                _ => writeln!(self.out, "  not a number, try again")?,
            }
        }
    }

    pub fn read_float(&mut self, bound: &FloatBound) -> Result<f32> {
        loop {
            let prompt = format!(
                "{} [{}-{}] ({}): ",
                bound.title, bound.min, bound.max, bound.default
            );
            let line = self.prompt(&prompt)?;
            if line.is_empty() {
                return Ok(bound.default);
            }
            match line.parse::<f32>() {
                Ok(v) if !v.is_nan() => {
                    let clamped = bound.clamp(v);
                    if clamped != v {
                        writeln!(self.out, "  using {clamped}")?;
                    }
                    return Ok(clamped);
                }
                _ => writeln!(self.out, "  not a number, try again")?,
            }
        }
    }

    /// Pick one option by 1-based index or by label (case-insensitive).
    pub fn select<C: Choice>(&mut self) -> Result<C> {
        writeln!(self.out, "{}:", C::TITLE)?;
        for (i, opt) in C::OPTIONS.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, opt.label())?;
        }
        loop {
            let line = self.prompt(&format!("choice ({}): ", C::OPTIONS[0].label()))?;
            if line.is_empty() {
                return Ok(C::OPTIONS[0]);
            }
            if let Ok(i) = line.parse::<usize>() {
                if (1..=C::OPTIONS.len()).contains(&i) {
                    return Ok(C::OPTIONS[i - 1]);
                }
            }
            let by_label = C::OPTIONS
                .iter()
                .find(|o| o.label().eq_ignore_ascii_case(&line));
            if let Some(opt) = by_label {
                return Ok(*opt);
            }
            writeln!(self.out, "  pick 1-{} or an option name", C::OPTIONS.len())?;
        }
    }

    /// Yes/no question; closed input counts as "no".
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.read_entry(&format!("{question} [y/N]: "))? {
            Some(line) => Ok(matches!(line.to_ascii_lowercase().as_str(), "y" | "yes")),
            None => {
                writeln!(self.out)?;
                Ok(false)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.read_entry(text)?.ok_or_else(|| {
            PredictorError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        })
    }

    fn read_entry(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parse a JSON request. Missing fields take the form defaults and numbers
/// are clamped the same way the controls clamp them.
pub fn parse_request(txt: &str) -> Result<RawDeliveryInput> {
    let raw: RawDeliveryInput =
        serde_json::from_str(txt).map_err(|e| PredictorError::Input(e.to_string()))?;
    Ok(raw.clamped())
}

pub fn load_request(path: &str) -> Result<RawDeliveryInput> {
    let txt = fs::read_to_string(path)
        .map_err(|e| PredictorError::Input(format!("failed to read {path}: {e}")))?;
    parse_request(&txt)
}
