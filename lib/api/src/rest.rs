use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use cropwise_artifacts::ArtifactStore;
use cropwise_core::{crops, Error, FeatureVector, Result, FEATURE_COUNT, FEATURE_NAMES};

use crate::pages;

/// Field names the HTML form submits, in feature order. "Phosporus" is the
/// name the form has always sent; renaming it would break existing clients.
pub const FORM_FIELDS: [&str; FEATURE_COUNT] = [
    "Nitrogen",
    "Phosporus",
    "Potassium",
    "Temperature",
    "Humidity",
    "Ph",
    "Rainfall",
];

pub struct RestApi;

impl RestApi {
    /// Starts the HTTP server on `port` and serves until shutdown.
    pub async fn start(store: Arc<ArtifactStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new().wrap(cors).configure(configure(store.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Route table, separate from [`RestApi::start`] so tests can mount it on an
/// in-process service.
pub fn configure(store: Arc<ArtifactStore>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(store))
            .route("/", web::get().to(index))
            .route("/predict", web::post().to(predict_web))
            .route("/api/predict", web::post().to(api_predict));
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index(None))
}

/// Form endpoint. Always 200: the page carries either the recommendation
/// sentence or an error sentence.
async fn predict_web(
    store: web::Data<Arc<ArtifactStore>>,
    form: web::Form<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    let result = match features_from_form(&form).and_then(|f| recommend(&store, &f)) {
        Ok(crop) => format!("{crop} is the best crop to be cultivated right there"),
        Err(e) => format!("Error in prediction: {e}"),
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index(Some(&result))))
}

/// JSON endpoint. 200 with the recommended crop, or 500 with an error
/// message when anything about the request or the pipeline fails.
async fn api_predict(
    store: web::Data<Arc<ArtifactStore>>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    match features_from_json(&body).and_then(|f| recommend(&store, &f)) {
        Ok(crop) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "recommended_crop": crop
        }))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

/// The one shared pipeline invocation behind both predict endpoints.
fn recommend(store: &ArtifactStore, features: &FeatureVector) -> Result<&'static str> {
    let label = store.pipeline().predict(features)?;
    Ok(crops::resolve(label))
}

/// Extracts the feature vector from form fields, keyed by the capitalized,
/// case-sensitive names in [`FORM_FIELDS`].
fn features_from_form(form: &HashMap<String, String>) -> Result<FeatureVector> {
    let mut values = [0.0f32; FEATURE_COUNT];
    for (slot, name) in values.iter_mut().zip(FORM_FIELDS) {
        let raw = form
            .get(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))?;
        *slot = parse_number(name, raw)?;
    }
    Ok(FeatureVector::new(values))
}

/// Extracts the feature vector from a JSON body, keyed by the lowercase
/// names in [`FEATURE_NAMES`]. Numbers and numeric strings are both
/// accepted.
fn features_from_json(body: &[u8]) -> Result<FeatureVector> {
    let data: Value =
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))?;

    let mut values = [0.0f32; FEATURE_COUNT];
    for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
        let field = data
            .get(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))?;
        *slot = match field {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN) as f32,
            Value::String(s) => parse_number(name, s)?,
            other => {
                return Err(Error::InvalidNumber {
                    field: name.to_string(),
                    value: other.to_string(),
                })
            }
        };
    }
    Ok(FeatureVector::new(values))
}

fn parse_number(field: &str, raw: &str) -> Result<f32> {
    raw.trim().parse::<f32>().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}
