pub mod decision_tree;

use std::path::Path;

use log::info;

use crate::errors::AdvisorError;
use crate::readings::FeatureVector;

pub use decision_tree::DecisionTreeModel;

/// A trained classification model mapping a feature vector to a fertilizer
/// class index.
///
/// The model is loaded once and shared read-only between requests, hence the
/// `&self` receiver and the `Send + Sync` bound. The returned index is not
/// range-checked here; callers resolve it against the fertilizer catalog.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i64, AdvisorError>;
}

/// A model that always answers with the same class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantModel {
    pub class_index: i64,
}

impl ConstantModel {
    pub fn new(class_index: i64) -> Self {
        Self { class_index }
    }
}

impl Classifier for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> Result<i64, AdvisorError> {
        Ok(self.class_index)
    }
}

/// Load a decision tree model from a JSON file.
pub fn load_model(path: &Path) -> Result<DecisionTreeModel, AdvisorError> {
    let model = DecisionTreeModel::from_path(path)?;
    info!(
        "Loaded classification model from {:?} ({} nodes)",
        path,
        model.node_count()
    );
    Ok(model)
}
