use log::{debug, warn};

use crate::catalog::FertilizerProduct;
use crate::classifier::Classifier;
use crate::errors::AdvisorError;
use crate::readings::{FeatureVector, SoilReadings};

/// Why the pipeline produced no product recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum NoRecommendationReason {
    /// No classification model is loaded
    ModelUnavailable,
    /// The soil name is not one the model was trained on
    UnknownSoil(String),
    /// The crop name is not one the model was trained on
    UnknownCrop(String),
    /// A numeric reading is non-finite or outside the trained range
    InvalidReading { field: String, reason: String },
    /// The model itself failed
    ModelFailure(String),
    /// The model answered with a class the catalog does not have
    ClassIndexOutOfRange(i64),
}

impl std::fmt::Display for NoRecommendationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModelUnavailable => write!(f, "no classification model loaded"),
            Self::UnknownSoil(soil) => write!(f, "unknown soil type {soil}"),
            Self::UnknownCrop(crop) => write!(f, "unknown crop type {crop}"),
            Self::InvalidReading { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::ModelFailure(reason) => write!(f, "model failure: {reason}"),
            Self::ClassIndexOutOfRange(index) => write!(f, "class index {index} out of range"),
        }
    }
}

impl From<AdvisorError> for NoRecommendationReason {
    fn from(error: AdvisorError) -> Self {
        match error {
            AdvisorError::UnknownSoil { soil } => Self::UnknownSoil(soil),
            AdvisorError::UnknownCrop { crop } => Self::UnknownCrop(crop),
            AdvisorError::InvalidUserInput { field, reason } => {
                Self::InvalidReading { field, reason }
            }
            AdvisorError::ClassIndexOutOfRange { index } => Self::ClassIndexOutOfRange(index),
            other => Self::ModelFailure(other.to_string()),
        }
    }
}

/// Outcome of the recommendation pipeline. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Recommended(FertilizerProduct),
    NoRecommendation(NoRecommendationReason),
}

impl Prediction {
    pub fn product(&self) -> Option<FertilizerProduct> {
        match self {
            Prediction::Recommended(product) => Some(*product),
            Prediction::NoRecommendation(_) => None,
        }
    }

    pub fn is_recommended(&self) -> bool {
        matches!(self, Prediction::Recommended(_))
    }
}

fn try_predict<C: Classifier + ?Sized>(
    readings: &SoilReadings,
    classifier: &C,
) -> Result<FertilizerProduct, AdvisorError> {
    let features = FeatureVector::from_readings(readings)?;
    readings.validate()?;
    let index = classifier.predict(&features)?;
    FertilizerProduct::from_class_index(index)
}

/// Run encode, classify and decode for one request.
///
/// Every failure along the way (unknown soil or crop, invalid reading, model
/// error, out-of-range class index) is logged and returned as
/// [`Prediction::NoRecommendation`].
pub fn predict<C: Classifier + ?Sized>(readings: &SoilReadings, classifier: &C) -> Prediction {
    match try_predict(readings, classifier) {
        Ok(product) => {
            debug!(
                "Model recommends {} for {} on {} soil",
                product, readings.crop_type, readings.soil_type
            );
            Prediction::Recommended(product)
        }
        Err(e) => {
            let reason = NoRecommendationReason::from(e);
            warn!("No fertilizer recommendation: {}", reason);
            Prediction::NoRecommendation(reason)
        }
    }
}

/// Like [`predict`], for callers that may not have a model loaded.
pub fn predict_with<C: Classifier + ?Sized>(
    readings: &SoilReadings,
    classifier: Option<&C>,
) -> Prediction {
    match classifier {
        Some(classifier) => predict(readings, classifier),
        None => {
            debug!("Skipping model prediction, no classifier loaded");
            Prediction::NoRecommendation(NoRecommendationReason::ModelUnavailable)
        }
    }
}
