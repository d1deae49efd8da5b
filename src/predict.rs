use crate::data::{TripForm, TripRecord};
use crate::error::PredictionError;
use crate::model::FareModel;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A predicted fare, in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare(pub f64);

impl Fare {
    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

pub type PredictionOutcome = Result<Fare, PredictionError>;

/// Turns one form submission into a fare. Holds nothing but the model handle,
/// so the same input always gives the same outcome.
#[derive(Clone)]
pub struct PredictionHandler {
    model: Arc<dyn FareModel>,
}

impl PredictionHandler {
    pub fn new(model: Arc<dyn FareModel>) -> Self {
        Self { model }
    }

    pub fn predict_form(&self, form: &TripForm) -> PredictionOutcome {
        let record = form.to_record().inspect_err(|err| {
            warn!(error = %err, "Trip form rejected");
        })?;
        self.predict(&record)
    }

    pub fn predict(&self, record: &TripRecord) -> PredictionOutcome {
        debug!(?record, "Predicting fare");

        match self.model.predict(record) {
            Ok(amount) => Ok(Fare(amount)),
            Err(err) => {
                warn!(error = %err, "Fare prediction failed");
                Err(err)
            }
        }
    }
}

pub fn render_outcome(outcome: &PredictionOutcome) -> String {
    match outcome {
        Ok(fare) => format!("Predicted Fare: {}", fare),
        Err(err) => format!("Error during prediction: {}", err),
    }
}
