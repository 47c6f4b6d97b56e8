//! Selection behaviour over fixture scenarios.

use std::collections::BTreeSet;

use curator_core::models::{FeatureMatrix, ItemRecord, Label};
use curator_core::CuratorError;
use curator_learning::geometry::{dot, squared_distance};
use curator_learning::{SelectionEngine, SelectionPhase};
use test_fixtures::load_scenario;

fn engine_for(name: &str) -> (SelectionEngine, test_fixtures::Scenario) {
    let scenario = load_scenario(name);
    let engine = SelectionEngine::new(scenario.matrix(), scenario.items.clone()).unwrap();
    (engine, scenario)
}

#[test]
fn four_corners_cold_start_returns_member_of_farthest_pair() {
    let (engine, scenario) = engine_for("four_corners");
    let (index, item) = engine.next_item().unwrap();
    let m = scenario.matrix();

    let partner_max = (0..m.rows())
        .map(|j| squared_distance(m.row(index), m.row(j)))
        .fold(f64::MIN, f64::max);
    assert_eq!(partner_max, 200.0);
    assert_eq!(item, scenario.items[index]);
}

#[test]
fn four_corners_boundary_pick_has_minimal_projection() {
    let (mut engine, scenario) = engine_for("four_corners");
    for step in &scenario.labels {
        engine.record_label(step.item_id, step.label.clone()).unwrap();
    }

    let selection = engine.select_next().unwrap();
    assert_eq!(selection.phase, SelectionPhase::BoundaryRefinement);

    // w = (0,0) - (10,10); indices 1 and 2 both project to |-100| and tie,
    // so the lower index wins.
    let a = &engine.centroids()["A"];
    let b = &engine.centroids()["B"];
    let w: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    let projection = |i: usize| dot(engine.features().row(i), &w).abs();
    assert_eq!(projection(1), projection(2));
    assert_eq!(selection.index, 1);
    assert_eq!(projection(selection.index), 100.0);
}

#[test]
fn boundary_ranks_by_raw_projection() {
    // w = 2 - 4 = -2: index 2 (x=0) projects to 0, index 3 (x=3) to 6,
    // even though x=3 is the point nearest the centroids' midpoint.
    let features =
        FeatureMatrix::from_rows(vec![vec![2.0], vec![4.0], vec![0.0], vec![3.0]]).unwrap();
    let items: Vec<ItemRecord> = (0..4)
        .map(|i| ItemRecord {
            id: i,
            title: format!("Line {i}"),
            artist: "Anon".to_string(),
            year: 1900,
            image_path: format!("/images/line_{i}.jpg"),
        })
        .collect();
    let mut engine = SelectionEngine::new(features, items).unwrap();
    engine.record_label(0, Label::new().with("q", "A")).unwrap();
    engine.record_label(1, Label::new().with("q", "B")).unwrap();

    let selection = engine.select_next().unwrap();
    assert_eq!(selection.phase, SelectionPhase::BoundaryRefinement);
    assert_eq!(selection.index, 2);
}

#[test]
fn four_corners_walks_every_item_once() {
    let (mut engine, scenario) = engine_for("four_corners");
    let mut seen = BTreeSet::new();
    for _ in 0..scenario.items.len() {
        let (index, item) = engine.next_item().unwrap();
        assert!(seen.insert(index), "index {index} offered twice");
        let tag = if index % 3 == 0 { "A" } else { "B" };
        engine.record_label(item.id, Label::new().with("q", tag)).unwrap();
    }
    assert!(matches!(
        engine.next_item(),
        Err(CuratorError::ExhaustedCollection { total: 4 })
    ));
}

#[test]
fn second_pick_is_farthest_from_the_labeled_item() {
    let (mut engine, scenario) = engine_for("three_classes");
    engine
        .record_label(scenario.items[3].id, Label::new().with("style", "x"))
        .unwrap();
    let (index, _) = engine.next_item().unwrap();
    assert_eq!(index, 10);
}

#[test]
fn three_classes_use_lexicographically_first_pair() {
    let (mut engine, scenario) = engine_for("three_classes");
    for step in &scenario.labels {
        engine.record_label(step.item_id, step.label.clone()).unwrap();
    }
    assert_eq!(engine.centroids().len(), 3);

    // baroque sits at x=10 and cubism at x=0, so w = (10, 0) and the
    // projection grows with x; x=0 is labeled, so x=1 is closest.
    let selection = engine.select_next().unwrap();
    assert_eq!(selection.phase, SelectionPhase::BoundaryRefinement);
    assert_eq!(selection.index, 1);
}

#[test]
fn first_answer_decides_class() {
    let (mut engine, scenario) = engine_for("three_classes");
    let step = &scenario.labels[0];
    engine.record_label(step.item_id, step.label.clone()).unwrap();
    assert_eq!(engine.class_assignments()[&0], "cubism");
    assert_eq!(engine.raw_labels()[&0].get("subject"), Some("still life"));
}

#[test]
fn zero_vector_rows_are_valid_items() {
    let features = FeatureMatrix::from_rows(vec![vec![0.0; 4]; 3]).unwrap();
    let items: Vec<ItemRecord> = (0..3)
        .map(|i| ItemRecord {
            id: i,
            title: format!("Blank {i}"),
            artist: "Unknown".to_string(),
            year: 0,
            image_path: String::new(),
        })
        .collect();
    let mut engine = SelectionEngine::new(features, items).unwrap();
    assert_eq!(engine.next_item().unwrap().0, 0);
    engine.record_label(0, Label::new().with("q", "A")).unwrap();
    assert_eq!(engine.next_item().unwrap().0, 1);
}

#[test]
fn learning_curve_grows_per_call_and_saturates() {
    let (mut engine, scenario) = engine_for("three_classes");
    let id = scenario.items[0].id;
    for _ in 0..5 {
        engine.record_label(id, Label::new().with("style", "a")).unwrap();
    }
    let curve = engine.learning_curve();
    assert_eq!(curve.len(), 5);
    // Relabeling the same item does not change progress.
    assert!(curve.windows(2).all(|w| w[0] == w[1]));
    assert!(curve.iter().all(|v| (0.5..0.95).contains(v)));
}

#[test]
fn stats_histogram_uses_tier_table() {
    let (mut engine, scenario) = engine_for("three_classes");
    for step in &scenario.labels {
        engine.record_label(step.item_id, step.label.clone()).unwrap();
    }
    let stats = engine.get_stats();
    // 3 of 11 labeled → accuracy ≈ 0.835, middle tier; 8 unlabeled.
    assert!(stats.accuracy > 0.8 && stats.accuracy <= 0.9);
    let json = serde_json::to_value(&stats).unwrap();
    let dist = &json["confidence_distribution"];
    assert_eq!(dist["90-100%"], 1);
    assert_eq!(dist["80-89%"], 3);
    assert_eq!(dist["70-79%"], 1);
    assert_eq!(dist["60-69%"], 0);
    assert_eq!(dist["50-59%"], 0);
    assert_eq!(dist["<50%"], 0);
}
