use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::AdvisorError;

/// Nitrogen share of Urea by weight
pub const UREA_NITROGEN_FRACTION: f64 = 0.46;
/// Phosphorus share of DAP by weight
pub const DAP_PHOSPHORUS_FRACTION: f64 = 0.46;
/// Potassium share of MOP by weight
pub const MOP_POTASSIUM_FRACTION: f64 = 0.60;

/// Standard macronutrient requirement of a crop, kg/ha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRequirement {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl NutrientRequirement {
    const fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }
}

const REQUIREMENTS: [(&str, NutrientRequirement); 4] = [
    ("maize", NutrientRequirement::new(120., 60., 60.)),
    ("wheat", NutrientRequirement::new(120., 60., 60.)),
    ("paddy", NutrientRequirement::new(100., 50., 50.)),
    ("sugarcane", NutrientRequirement::new(150., 100., 80.)),
];

static REQUIREMENT_TABLE: LazyLock<HashMap<&'static str, NutrientRequirement>> =
    LazyLock::new(|| REQUIREMENTS.into_iter().collect());

/// Look up the per-hectare N/P/K requirement of a crop.
pub fn requirement_for(crop: &str) -> Result<NutrientRequirement, AdvisorError> {
    REQUIREMENT_TABLE
        .get(crop)
        .copied()
        .ok_or_else(|| AdvisorError::UnknownCrop {
            crop: crop.to_string(),
        })
}

/// Crops with a known requirement, in table order.
pub fn known_crops() -> impl Iterator<Item = &'static str> {
    REQUIREMENTS.iter().map(|(crop, _)| *crop)
}

/// Fertilizer application rates, kg/ha, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FertilizerQuantities {
    pub urea: f64,
    pub dap: f64,
    pub mop: f64,
}

impl FertilizerQuantities {
    pub fn from_requirement(requirement: &NutrientRequirement) -> Self {
        Self {
            urea: requirement.nitrogen / UREA_NITROGEN_FRACTION,
            dap: requirement.phosphorus / DAP_PHOSPHORUS_FRACTION,
            mop: requirement.potassium / MOP_POTASSIUM_FRACTION,
        }
    }

    /// Totals for a field of `hectares`.
    pub fn scaled(&self, hectares: f64) -> Self {
        Self {
            urea: self.urea * hectares,
            dap: self.dap * hectares,
            mop: self.mop * hectares,
        }
    }
}

impl std::fmt::Display for FertilizerQuantities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "- Urea: {:.2} kg/ha\n- DAP: {:.2} kg/ha\n- MOP: {:.2} kg/ha",
            self.urea, self.dap, self.mop
        )
    }
}

/// Convert a crop's standard N/P/K requirement into Urea, DAP and MOP
/// quantities. Unknown crops fail with [`AdvisorError::UnknownCrop`].
pub fn calculate(crop: &str) -> Result<FertilizerQuantities, AdvisorError> {
    requirement_for(crop).map(|requirement| FertilizerQuantities::from_requirement(&requirement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round2(value: f64) -> f64 {
        (value * 100.).round() / 100.
    }

    #[test]
    fn test_maize() {
        let q = calculate("maize").unwrap();
        assert_eq!(round2(q.urea), 260.87);
        assert_eq!(round2(q.dap), 130.43);
        assert_eq!(round2(q.mop), 100.00);
    }

    #[test]
    fn test_sugarcane() {
        let q = calculate("sugarcane").unwrap();
        assert_eq!(round2(q.urea), 326.09);
        assert_eq!(round2(q.dap), 217.39);
        assert_eq!(round2(q.mop), 133.33);
    }

    #[test]
    fn test_wheat_matches_maize() {
        assert_eq!(calculate("wheat").unwrap(), calculate("maize").unwrap());
    }

    #[test]
    fn test_paddy() {
        let q = calculate("paddy").unwrap();
        assert_eq!(format!("{:.2}", q.urea), "217.39");
        assert_eq!(format!("{:.2}", q.dap), "108.70");
        assert_eq!(format!("{:.2}", q.mop), "83.33");
    }

    #[test]
    fn test_values_are_not_pre_rounded() {
        let q = calculate("maize").unwrap();
        assert_eq!(q.urea, 120. / 0.46);
        assert_ne!(q.urea, 260.87);
    }

    #[test]
    fn test_unknown_crop() {
        let err = calculate("barley").unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownCrop { ref crop } if crop == "barley"));
        assert_eq!(err.to_string(), "Invalid crop type: barley");
    }

    #[test]
    fn test_display_block() {
        assert_eq!(
            calculate("maize").unwrap().to_string(),
            "- Urea: 260.87 kg/ha\n- DAP: 130.43 kg/ha\n- MOP: 100.00 kg/ha"
        );
    }

    #[test]
    fn test_scaled() {
        let q = calculate("paddy").unwrap().scaled(2.5);
        assert!((q.mop - 50. / 0.6 * 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_known_crops_align_with_encoder() {
        let crops: Vec<&str> = known_crops().collect();
        assert_eq!(crops, crate::encoder::CROP_TYPES.to_vec());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_quantities_follow_nutrient_ratios(crop_idx in 0usize..4) {
            let (crop, requirement) = REQUIREMENTS[crop_idx];
            let q = calculate(crop).unwrap();
            prop_assert!((q.urea * UREA_NITROGEN_FRACTION - requirement.nitrogen).abs() < 1e-9);
            prop_assert!((q.dap * DAP_PHOSPHORUS_FRACTION - requirement.phosphorus).abs() < 1e-9);
            prop_assert!((q.mop * MOP_POTASSIUM_FRACTION - requirement.potassium).abs() < 1e-9);
        }

        #[test]
        fn prop_unknown_crops_are_named_in_error(crop in "[a-z]{1,10}") {
            prop_assume!(!known_crops().any(|known| known == crop));
            let err = calculate(&crop).unwrap_err();
            prop_assert_eq!(err.to_string(), format!("Invalid crop type: {crop}"));
        }
    }
}
