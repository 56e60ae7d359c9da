// Integration tests for Cropwise
//
// The HTTP scenarios run against an in-process actix service backed by a
// deterministic fixture artifact set: rainfall and humidity splits with
// known outcomes, saved and reloaded through the real artifact store.
use actix_web::{test, App};
use std::sync::Arc;

use cropwise::{
    crops, ArtifactStore, CropClassifier, FeatureVector, MinMaxScaler, StandardScaler, TreeNode,
    FEATURE_COUNT, MINMAX_SCALER_FILE,
};
use cropwise_api::rest;

fn split(feature: usize, threshold: f32, left: TreeNode, right: TreeNode) -> TreeNode {
    TreeNode::Split {
        feature,
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn fixture_minmax() -> MinMaxScaler {
    MinMaxScaler::from_params(
        vec![0.0; FEATURE_COUNT],
        vec![140.0, 145.0, 205.0, 50.0, 100.0, 14.0, 300.0],
    )
}

fn fixture_standard() -> StandardScaler {
    StandardScaler::from_params(vec![0.5; FEATURE_COUNT], vec![0.25; FEATURE_COUNT])
}

/// Two rainfall trees and one humidity tree: wet climates land on Rice (1),
/// dry ones on Chickpea (21), with Maize (2) as the dissenting humidity
/// vote.
fn fixture_classifier() -> CropClassifier {
    let rain_tree = || {
        split(
            6,
            0.0,
            TreeNode::Leaf { label: 21 },
            TreeNode::Leaf { label: 1 },
        )
    };
    let humidity_tree = split(
        4,
        0.2,
        TreeNode::Leaf { label: 2 },
        TreeNode::Leaf { label: 1 },
    );
    CropClassifier::new(vec![rain_tree(), humidity_tree, rain_tree()], FEATURE_COUNT).unwrap()
}

fn fixture_store(dir: &std::path::Path) -> Arc<ArtifactStore> {
    ArtifactStore::save(
        dir,
        &fixture_minmax(),
        &fixture_standard(),
        &fixture_classifier(),
    )
    .unwrap();
    Arc::new(ArtifactStore::load(dir).unwrap())
}

const SCENARIO_FORM: [(&str, &str); 7] = [
    ("Nitrogen", "90"),
    ("Phosporus", "42"),
    ("Potassium", "43"),
    ("Temperature", "20.8"),
    ("Humidity", "82"),
    ("Ph", "6.5"),
    ("Rainfall", "202.9"),
];

#[actix_web::test]
async fn test_index_page_serves_the_form() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("<form"));
    assert!(body.contains("name=\"Phosporus\""));
    assert!(!body.contains("best crop"));
}

#[actix_web::test]
async fn test_form_predict_returns_recommendation_sentence() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(SCENARIO_FORM.to_vec())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Rice is the best crop to be cultivated right there"));
}

#[actix_web::test]
async fn test_json_predict_returns_recommended_crop() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let req = test::TestRequest::post()
        .uri("/api/predict")
        .set_json(serde_json::json!({
            "nitrogen": 90,
            "phosphorus": 42,
            "potassium": 43,
            "temperature": 20.8,
            "humidity": 82,
            "ph": 6.5,
            "rainfall": 202.9
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["recommended_crop"], "Rice");
}

#[actix_web::test]
async fn test_form_predict_with_missing_field_still_answers_200() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let partial: Vec<(&str, &str)> = SCENARIO_FORM
        .iter()
        .copied()
        .filter(|(name, _)| *name != "Rainfall")
        .collect();

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(partial)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Error in prediction:"));
    assert!(body.contains("Rainfall"));
}

#[actix_web::test]
async fn test_json_predict_with_non_numeric_value_answers_500() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let req = test::TestRequest::post()
        .uri("/api/predict")
        .set_json(serde_json::json!({
            "nitrogen": 90,
            "phosphorus": 42,
            "potassium": "plenty",
            "temperature": 20.8,
            "humidity": 82,
            "ph": 6.5,
            "rainfall": 202.9
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("potassium"));
}

#[actix_web::test]
async fn test_json_predict_with_malformed_body_answers_500() {
    let dir = tempfile::tempdir().unwrap();
    let app =
        test::init_service(App::new().configure(rest::configure(fixture_store(dir.path())))).await;

    let req = test::TestRequest::post()
        .uri("/api/predict")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn test_out_of_range_label_resolves_to_unknown_crop() {
    let dir = tempfile::tempdir().unwrap();
    // A classifier whose only leaf is outside the crop table.
    let classifier =
        CropClassifier::new(vec![TreeNode::Leaf { label: 99 }], FEATURE_COUNT).unwrap();
    ArtifactStore::save(dir.path(), &fixture_minmax(), &fixture_standard(), &classifier).unwrap();
    let store = Arc::new(ArtifactStore::load(dir.path()).unwrap());

    let app = test::init_service(App::new().configure(rest::configure(store))).await;

    let req = test::TestRequest::post()
        .uri("/api/predict")
        .set_json(serde_json::json!({
            "nitrogen": 90,
            "phosphorus": 42,
            "potassium": 43,
            "temperature": 20.8,
            "humidity": 82,
            "ph": 6.5,
            "rainfall": 202.9
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["recommended_crop"], "Unknown Crop");
}

#[actix_web::test]
async fn test_form_response_reflects_the_pipeline_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(dir.path());
    let app = test::init_service(App::new().configure(rest::configure(store.clone()))).await;

    let form_req = test::TestRequest::post()
        .uri("/predict")
        .set_form(SCENARIO_FORM.to_vec())
        .to_request();
    let form_body =
        String::from_utf8(test::call_and_read_body(&app, form_req).await.to_vec()).unwrap();

    let label = store
        .pipeline()
        .predict(&FeatureVector::new([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]))
        .unwrap();
    assert!(form_body.contains(crops::resolve(label)));
}

#[::core::prelude::v1::test]
fn test_startup_fails_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let err = ArtifactStore::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains(MINMAX_SCALER_FILE));
}

#[::core::prelude::v1::test]
fn test_dry_climate_gets_the_majority_vote() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(dir.path());

    // Low rainfall and humidity: the two rainfall trees outvote the
    // humidity tree.
    let dry = FeatureVector::new([90.0, 42.0, 43.0, 20.8, 20.0, 6.5, 40.0]);
    let label = store.pipeline().predict(&dry).unwrap();
    assert_eq!(crops::resolve(label), "Chickpea");
}
