use serde::{Deserialize, Serialize};

use crate::errors::AdvisorError;

/// The fertilizer products the classification model can recommend.
///
/// Variants are declared in class-index order: the model's output class `i`
/// is `FertilizerProduct::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FertilizerProduct {
    /// 10-26-26 NPK blend
    Npk102626,
    /// 14-35-14 NPK blend
    Npk143514,
    /// Balanced 17-17-17 NPK blend
    Npk171717,
    /// 20-20 NP blend
    Np2020,
    /// 28-28 NP blend
    Np2828,
    /// Diammonium phosphate
    Dap,
}

impl FertilizerProduct {
    pub const ALL: [FertilizerProduct; 6] = [
        FertilizerProduct::Npk102626,
        FertilizerProduct::Npk143514,
        FertilizerProduct::Npk171717,
        FertilizerProduct::Np2020,
        FertilizerProduct::Np2828,
        FertilizerProduct::Dap,
    ];

    /// Resolve a model class index. Only `0..6` is valid; anything else,
    /// including negative indices, is rejected.
    pub fn from_class_index(index: i64) -> Result<Self, AdvisorError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(AdvisorError::ClassIndexOutOfRange { index })
    }

    pub fn class_index(&self) -> usize {
        match self {
            FertilizerProduct::Npk102626 => 0,
            FertilizerProduct::Npk143514 => 1,
            FertilizerProduct::Npk171717 => 2,
            FertilizerProduct::Np2020 => 3,
            FertilizerProduct::Np2828 => 4,
            FertilizerProduct::Dap => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FertilizerProduct::Npk102626 => "10-26-26 Fertilizer",
            FertilizerProduct::Npk143514 => "14-35-14 Fertilizer",
            FertilizerProduct::Npk171717 => "17-17-17 Fertilizer",
            FertilizerProduct::Np2020 => "20-20 Fertilizer",
            FertilizerProduct::Np2828 => "28-28 Fertilizer",
            FertilizerProduct::Dap => "DAP (Diammonium phosphate) Fertilizer",
        }
    }
}

impl std::fmt::Display for FertilizerProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
