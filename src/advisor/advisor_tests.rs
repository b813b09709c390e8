#[cfg(test)]
mod fertilizer_advisor_tests {
    use crate::advisor::FertilizerAdvisor;
    use crate::catalog::FertilizerProduct;
    use crate::classifier::{ConstantModel, DecisionTreeModel, decision_tree::TreeNode};
    use crate::pipeline::{NoRecommendationReason, Prediction};
    use crate::readings::SoilReadings;

    const MAIZE_BLOCK: &str = "- Urea: 260.87 kg/ha\n- DAP: 130.43 kg/ha\n- MOP: 100.00 kg/ha";

    #[test]
    fn test_report_with_model_recommendation() {
        let advisor = FertilizerAdvisor::new(ConstantModel::new(0));
        let report = advisor.predict_fertilizer(26.0, 52.0, 38.0, "Sandy", "maize", 37.0, 0.0, 0.0);
        assert_eq!(
            report,
            format!("**Fertilizer Recommendation:**\n- 10-26-26 Fertilizer\n\n{MAIZE_BLOCK}")
        );
    }

    #[test]
    fn test_report_omits_line_for_out_of_range_class() {
        let advisor = FertilizerAdvisor::new(ConstantModel::new(6));
        let report = advisor.predict_fertilizer(26.0, 52.0, 38.0, "Sandy", "maize", 37.0, 0.0, 0.0);
        assert_eq!(report, format!("**Fertilizer Recommendation:**\n{MAIZE_BLOCK}"));
    }

    #[test]
    fn test_unknown_soil_still_calculates() {
        let advisor = FertilizerAdvisor::new(ConstantModel::new(2));
        let report = advisor.predict_fertilizer(26.0, 52.0, 38.0, "Peaty", "maize", 37.0, 0.0, 0.0);
        assert!(!report.contains("17-17-17"));
        assert!(report.ends_with(MAIZE_BLOCK));
    }

    #[test]
    fn test_unknown_crop_reports_message_without_model_line() {
        let advisor = FertilizerAdvisor::new(ConstantModel::new(2));
        let report =
            advisor.predict_fertilizer(26.0, 52.0, 38.0, "Loamy", "barley", 37.0, 0.0, 0.0);
        assert_eq!(report, "**Fertilizer Recommendation:**\nInvalid crop type: barley");
    }

    #[test]
    fn test_advisor_without_model() {
        let advisor = FertilizerAdvisor::without_model();
        assert!(!advisor.has_model());

        let readings = SoilReadings::default();
        assert_eq!(
            advisor.predict(&readings),
            Prediction::NoRecommendation(NoRecommendationReason::ModelUnavailable)
        );
        let report = advisor.report(&readings);
        assert_eq!(report.product, None);
        assert!(report.quantities.is_ok());
    }

    #[test]
    fn test_advisor_with_decision_tree() {
        // humidity <= 60 -> DAP, else 20-20
        let tree = DecisionTreeModel::new(vec![
            TreeNode::Split {
                feature: 1,
                threshold: 60.,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { class: 5 },
            TreeNode::Leaf { class: 3 },
        ])
        .unwrap();
        let advisor = FertilizerAdvisor::new(tree);

        let dry = SoilReadings {
            humidity: 40.,
            crop_type: "paddy".to_string(),
            ..SoilReadings::default()
        };
        let humid = SoilReadings {
            humidity: 80.,
            ..dry.clone()
        };
        assert_eq!(advisor.predict(&dry).product(), Some(FertilizerProduct::Dap));
        assert_eq!(advisor.predict(&humid).product(), Some(FertilizerProduct::Np2020));
        assert!(
            advisor
                .report(&humid)
                .to_string()
                .starts_with("**Fertilizer Recommendation:**\n- 20-20 Fertilizer\n\n- Urea: 217.39")
        );
    }

    #[test]
    fn test_missing_model_file_falls_back() {
        let advisor = FertilizerAdvisor::from_model_path_or_fallback(std::path::Path::new(
            "/nonexistent/fertilizer-model.json",
        ));
        assert!(!advisor.has_model());
    }
}
