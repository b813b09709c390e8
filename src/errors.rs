// Error types for the fertilizer advisor

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AdvisorError {
    // Category lookup errors
    #[snafu(display("Unknown soil type: {soil}"))]
    UnknownSoil { soil: String },
    #[snafu(display("Invalid crop type: {crop}"))]
    UnknownCrop { crop: String },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },

    // Classification model errors
    #[snafu(display("Error reading model file {path}"))]
    ModelIO { path: String, source: io::Error },
    #[snafu(display("Error parsing model file {path}"))]
    ModelParse {
        path: String,
        source: serde_json::Error,
    },
    #[snafu(display("Invalid model: {reason}"))]
    InvalidModel { reason: String },
    #[snafu(display("Model invocation failed: {reason}"))]
    ModelInvocation { reason: String },
    #[snafu(display("Model returned class index {index} outside the fertilizer catalog"))]
    ClassIndexOutOfRange { index: i64 },

    // Config management errors
    #[snafu(display("Could not find application config directory"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIO { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerialize { source: serde_json::Error },

    // Batch request errors
    #[snafu(display("Error reading requests file {path}"))]
    RequestsIO { path: String, source: io::Error },
}
