// Library interface for the fertilizer advisor
// This allows integration tests and the CLI to access internal modules

pub mod advisor;
pub mod batch;
pub mod calculator;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod pipeline;
pub mod readings;
pub mod report;

// Re-export commonly used types
pub use advisor::FertilizerAdvisor;
pub use calculator::{FertilizerQuantities, NutrientRequirement, calculate};
pub use catalog::FertilizerProduct;
pub use classifier::{Classifier, ConstantModel, DecisionTreeModel};
pub use errors::AdvisorError;
pub use pipeline::{NoRecommendationReason, Prediction, predict};
pub use readings::{FeatureVector, SoilReadings};
pub use report::RecommendationReport;
