use std::path::Path;

use log::{info, warn};

use crate::calculator::calculate;
use crate::classifier::{Classifier, load_model};
use crate::errors::AdvisorError;
use crate::pipeline::{Prediction, predict_with};
use crate::readings::SoilReadings;
use crate::report::RecommendationReport;

mod advisor_tests;

/// Entry point for the presentation layer.
///
/// Holds the classification model, loaded once, and combines the model's
/// product prediction with the deterministic requirement calculator. The
/// calculator always runs, so every report carries either quantities or a
/// message naming the bad crop.
pub struct FertilizerAdvisor {
    classifier: Option<Box<dyn Classifier>>,
}

impl FertilizerAdvisor {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Some(Box::new(classifier)),
        }
    }

    /// An advisor with no model. Reports contain only calculator output.
    pub fn without_model() -> Self {
        Self { classifier: None }
    }

    /// Load the model at `path`.
    pub fn from_model_path(path: &Path) -> Result<Self, AdvisorError> {
        Ok(Self::new(load_model(path)?))
    }

    /// Load the model at `path`, falling back to an advisor without a model
    /// when it cannot be loaded.
    pub fn from_model_path_or_fallback(path: &Path) -> Self {
        match Self::from_model_path(path) {
            Ok(advisor) => advisor,
            Err(e) => {
                warn!("Could not load model from {:?}, continuing without it: {}", path, e);
                Self::without_model()
            }
        }
    }

    pub fn has_model(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn predict(&self, readings: &SoilReadings) -> Prediction {
        predict_with(readings, self.classifier.as_deref())
    }

    pub fn report(&self, readings: &SoilReadings) -> RecommendationReport {
        let prediction = self.predict(readings);
        let quantities = calculate(&readings.crop_type);
        if let Err(e) = &quantities {
            info!("Calculator rejected request: {}", e);
        }
        RecommendationReport::new(prediction.product(), quantities)
    }

    /// Produce the report text for one set of readings.
    #[allow(clippy::too_many_arguments)]
    pub fn predict_fertilizer(
        &self,
        temperature: f64,
        humidity: f64,
        moisture: f64,
        soil_type: &str,
        crop_type: &str,
        nitrogen: f64,
        potassium: f64,
        phosphorous: f64,
    ) -> String {
        let readings = SoilReadings {
            temperature,
            humidity,
            moisture,
            soil_type: soil_type.to_string(),
            crop_type: crop_type.to_string(),
            nitrogen,
            potassium,
            phosphorous,
        };
        self.report(&readings).to_string()
    }
}

impl std::fmt::Debug for FertilizerAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FertilizerAdvisor")
            .field("has_model", &self.has_model())
            .finish()
    }
}
