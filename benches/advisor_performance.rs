use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fertilizer_advisor::classifier::decision_tree::TreeNode;
use fertilizer_advisor::{DecisionTreeModel, FertilizerAdvisor, SoilReadings, calculate};

fn create_sample_readings(i: usize) -> SoilReadings {
    SoilReadings {
        temperature: (i % 45) as f64,
        humidity: (i % 100) as f64,
        moisture: ((i * 7) % 100) as f64,
        soil_type: ["Sandy", "Clayey", "Loamy", "Black"][i % 4].to_string(),
        crop_type: ["maize", "wheat", "paddy", "sugarcane"][i % 4].to_string(),
        nitrogen: (i % 50) as f64,
        potassium: (i % 20) as f64,
        phosphorous: (i % 30) as f64,
    }
}

fn create_sample_tree() -> DecisionTreeModel {
    DecisionTreeModel::new(vec![
        TreeNode::Split {
            feature: 0,
            threshold: 30.0,
            left: 1,
            right: 2,
        },
        TreeNode::Split {
            feature: 1,
            threshold: 50.0,
            left: 3,
            right: 4,
        },
        TreeNode::Split {
            feature: 5,
            threshold: 25.0,
            left: 5,
            right: 6,
        },
        TreeNode::Leaf { class: 0 },
        TreeNode::Leaf { class: 1 },
        TreeNode::Leaf { class: 2 },
        TreeNode::Leaf { class: 5 },
    ])
    .expect("sample tree is valid")
}

fn bench_calculator(c: &mut Criterion) {
    c.bench_function("calculate_sugarcane", |b| {
        b.iter(|| calculate(black_box("sugarcane")))
    });
}

fn bench_report(c: &mut Criterion) {
    let advisor = FertilizerAdvisor::new(create_sample_tree());
    let readings: Vec<SoilReadings> = (0..100).map(create_sample_readings).collect();

    let mut group = c.benchmark_group("advisor");
    group.bench_function("predict_100", |b| {
        b.iter(|| {
            for r in &readings {
                black_box(advisor.predict(r));
            }
        })
    });
    group.bench_function("report_100", |b| {
        b.iter(|| {
            for r in &readings {
                black_box(advisor.report(r).to_string());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_calculator, bench_report);
criterion_main!(benches);
