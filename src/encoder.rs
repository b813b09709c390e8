use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::AdvisorError;

/// Which category a [`CategoryTable`] encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Soil,
    Crop,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Soil => write!(f, "Soil Type"),
            CategoryKind::Crop => write!(f, "Crop Type"),
        }
    }
}

/// Soil names in code order, as the classification model was trained on them.
pub const SOIL_TYPES: [&str; 4] = ["Sandy", "Clayey", "Loamy", "Black"];

/// Crop names in code order, as the classification model was trained on them.
pub const CROP_TYPES: [&str; 4] = ["maize", "wheat", "paddy", "sugarcane"];

/// A fixed bijection between category names and the integer codes the
/// classification model expects.
///
/// Codes are the position of the name in the backing slice, so every name has
/// exactly one code and every code in `0..len()` has exactly one name. Name
/// matching is exact: `"sandy"` is not `"Sandy"`.
#[derive(Debug)]
pub struct CategoryTable {
    kind: CategoryKind,
    names: &'static [&'static str],
    codes: HashMap<&'static str, u32>,
}

impl CategoryTable {
    fn new(kind: CategoryKind, names: &'static [&'static str]) -> Self {
        let codes = names
            .iter()
            .enumerate()
            .map(|(code, name)| (*name, code as u32))
            .collect();
        Self { kind, names, codes }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Resolve a category name to its code. Names outside the table fail;
    /// there is no default code.
    pub fn encode(&self, name: &str) -> Result<u32, AdvisorError> {
        self.codes.get(name).copied().ok_or_else(|| match self.kind {
            CategoryKind::Soil => AdvisorError::UnknownSoil {
                soil: name.to_string(),
            },
            CategoryKind::Crop => AdvisorError::UnknownCrop {
                crop: name.to_string(),
            },
        })
    }

    pub fn decode(&self, code: u32) -> Option<&'static str> {
        self.names.get(code as usize).copied()
    }

    /// Names in code order.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub static SOIL_TABLE: LazyLock<CategoryTable> =
    LazyLock::new(|| CategoryTable::new(CategoryKind::Soil, &SOIL_TYPES));

pub static CROP_TABLE: LazyLock<CategoryTable> =
    LazyLock::new(|| CategoryTable::new(CategoryKind::Crop, &CROP_TYPES));

pub fn encode_soil(name: &str) -> Result<u32, AdvisorError> {
    SOIL_TABLE.encode(name)
}

pub fn encode_crop(name: &str) -> Result<u32, AdvisorError> {
    CROP_TABLE.encode(name)
}
