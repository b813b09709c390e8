use serde::{Deserialize, Serialize};

use crate::encoder::{encode_crop, encode_soil};
use crate::errors::AdvisorError;

pub const TEMPERATURE_RANGE_C: (f64, f64) = (0.0, 45.0);
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

/// Number of features the classification model consumes.
pub const FEATURE_COUNT: usize = 8;

/// One advice request: environmental readings plus the soil and crop the user
/// selected, by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilReadings {
    /// Air temperature, °C
    pub temperature: f64,
    /// Relative humidity, %
    pub humidity: f64,
    /// Soil moisture, %
    pub moisture: f64,
    pub soil_type: String,
    pub crop_type: String,
    /// Soil nitrogen, kg/ha
    pub nitrogen: f64,
    /// Soil potassium, kg/ha
    pub potassium: f64,
    /// Soil phosphorous, kg/ha
    pub phosphorous: f64,
}

impl Default for SoilReadings {
    fn default() -> Self {
        Self {
            temperature: 0.,
            humidity: 0.,
            moisture: 0.,
            soil_type: "Sandy".to_string(),
            crop_type: "maize".to_string(),
            nitrogen: 0.,
            potassium: 0.,
            phosphorous: 0.,
        }
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), AdvisorError> {
    if !value.is_finite() {
        return Err(AdvisorError::InvalidUserInput {
            field: field.to_string(),
            reason: format!("{value} is not a finite number"),
        });
    }
    if value < min || value > max {
        return Err(AdvisorError::InvalidUserInput {
            field: field.to_string(),
            reason: format!("{value} is outside {min}..={max}"),
        });
    }
    Ok(())
}

impl SoilReadings {
    /// Check the numeric readings against the ranges the model was trained on.
    /// Category names are checked separately, by the encoder.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        check_range("temperature", self.temperature, TEMPERATURE_RANGE_C)?;
        check_range("humidity", self.humidity, PERCENT_RANGE)?;
        check_range("moisture", self.moisture, PERCENT_RANGE)?;
        for (field, value) in [
            ("nitrogen", self.nitrogen),
            ("potassium", self.potassium),
            ("phosphorous", self.phosphorous),
        ] {
            check_range(field, value, (0.0, f64::INFINITY))?;
        }
        Ok(())
    }
}

/// The model input, in the exact order the classifier was trained with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_code: u32,
    pub crop_code: u32,
    pub nitrogen: f64,
    pub potassium: f64,
    pub phosphorous: f64,
}

impl FeatureVector {
    /// Encode the soil and crop names and assemble the vector. Fails if either
    /// name is not a known category.
    pub fn from_readings(readings: &SoilReadings) -> Result<Self, AdvisorError> {
        Ok(Self {
            temperature: readings.temperature,
            humidity: readings.humidity,
            moisture: readings.moisture,
            soil_code: encode_soil(&readings.soil_type)?,
            crop_code: encode_crop(&readings.crop_type)?,
            nitrogen: readings.nitrogen,
            potassium: readings.potassium,
            phosphorous: readings.phosphorous,
        })
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.moisture,
            f64::from(self.soil_code),
            f64::from(self.crop_code),
            self.nitrogen,
            self.potassium,
            self.phosphorous,
        ]
    }
}
