use crate::calculator::FertilizerQuantities;
use crate::catalog::FertilizerProduct;
use crate::errors::AdvisorError;

pub const REPORT_HEADER: &str = "**Fertilizer Recommendation:**";

/// The combined output of the two advice paths for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    /// Product suggested by the classification model, if it produced one
    pub product: Option<FertilizerProduct>,
    /// Calculator output, or the message explaining why there is none
    pub quantities: Result<FertilizerQuantities, String>,
}

impl RecommendationReport {
    pub fn new(
        product: Option<FertilizerProduct>,
        quantities: Result<FertilizerQuantities, AdvisorError>,
    ) -> Self {
        Self {
            product,
            quantities: quantities.map_err(|e| e.to_string()),
        }
    }
}

impl std::fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        if let Some(product) = &self.product {
            write!(f, "- {product}\n\n")?;
        }
        match &self.quantities {
            Ok(quantities) => write!(f, "{quantities}"),
            Err(message) => write!(f, "{message}"),
        }
    }
}
