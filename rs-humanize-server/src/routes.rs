use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, ResponseError};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use rs_humanize_core::{HumanizeError, Humanizer};

/// Body of `POST /humanize`
#[derive(Deserialize)]
struct HumanizeRequest {
	text: Option<String>,
}

/// JSON error body.
///
/// `details` is only present for processing failures.
#[derive(Serialize)]
struct ErrorBody {
	error: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<String>,
}

/// Boundary wrapper turning a `HumanizeError` into an HTTP response.
///
/// Only errors the pipeline returns, or a blocking task that was cancelled,
/// reach this type. Release builds set `panic = "abort"`, so a panic inside
/// `web::block` ends the process instead of producing a 500.
#[derive(Debug)]
pub struct ApiError(pub HumanizeError);

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self.0 {
			HumanizeError::MissingInput => StatusCode::BAD_REQUEST,
			HumanizeError::ProcessingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let body = match &self.0 {
			HumanizeError::MissingInput => ErrorBody {
				error: "Text is required",
				details: None,
			},
			HumanizeError::ProcessingFailure(details) => ErrorBody {
				error: "Humanization failed.",
				details: Some(details.clone()),
			},
		};
		HttpResponse::build(self.status_code()).json(body)
	}
}

/// HTTP POST endpoint `/humanize`
///
/// Runs the pipeline on the blocking pool and returns the rewritten text
/// with both word counts.
#[post("/humanize")]
async fn humanize(data: web::Data<Humanizer>, body: web::Json<HumanizeRequest>) -> Result<HttpResponse, ApiError> {
	let text = match body.into_inner().text {
		Some(t) if !t.trim().is_empty() => t,
		_ => return Err(ApiError(HumanizeError::MissingInput)),
	};

	let humanizer = data.clone();
	let result = web::block(move || humanizer.humanize(&text))
		.await
		.map_err(|e| ApiError(HumanizeError::ProcessingFailure(e.to_string())))?;

	match result {
		Ok(humanized) => Ok(HttpResponse::Ok().json(humanized)),
		Err(e) => {
			error!("Humanization error: {e}");
			Err(ApiError(e))
		}
	}
}

/// Rejects unreadable bodies the same way as a missing `text` field.
fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		warn!("Rejected request body: {err}");
		ApiError(HumanizeError::MissingInput).into()
	})
}

/// Registers the endpoint and its body extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(json_config()).service(humanize);
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_cors::Cors;
	use actix_web::body::to_bytes;
	use actix_web::{test, App};
	use serde_json::{json, Value};

	const SAMPLE: &str = "This is a test. It will not work. Therefore we utilize another approach.";

	fn shared_humanizer() -> web::Data<Humanizer> {
		web::Data::new(Humanizer::english().unwrap())
	}

	#[actix_web::test]
	async fn humanizes_sample_text() {
		let app = test::init_service(App::new().app_data(shared_humanizer()).configure(configure)).await;

		for _ in 0..20 {
			let req = test::TestRequest::post()
				.uri("/humanize")
				.set_json(json!({ "text": SAMPLE }))
				.to_request();
			let body: Value = test::call_and_read_body_json(&app, req).await;

			assert_eq!(body["originalWordCount"], 13);
			let final_count = body["finalWordCount"].as_u64().unwrap();
			assert!((12..=13).contains(&final_count), "{body}");
			let humanized = body["humanized"].as_str().unwrap();
			assert!(!humanized.contains(".."));
			assert!(humanized.ends_with(['.', '!', '?']));
		}
	}

	#[actix_web::test]
	async fn empty_text_is_a_client_error() {
		let app = test::init_service(App::new().app_data(shared_humanizer()).configure(configure)).await;

		for payload in [json!({ "text": "" }), json!({ "text": "   " }), json!({}), json!({ "text": null })] {
			let req = test::TestRequest::post().uri("/humanize").set_json(payload).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

			let body: Value = test::read_body_json(resp).await;
			assert_eq!(body, json!({ "error": "Text is required" }));
		}
	}

	#[actix_web::test]
	async fn malformed_body_is_a_client_error() {
		let app = test::init_service(App::new().app_data(shared_humanizer()).configure(configure)).await;

		let req = test::TestRequest::post()
			.uri("/humanize")
			.insert_header(("content-type", "application/json"))
			.set_payload("{not json")
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn cors_allows_any_origin() {
		let app = test::init_service(
			App::new()
				.wrap(Cors::permissive())
				.app_data(shared_humanizer())
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post()
			.uri("/humanize")
			.insert_header(("origin", "http://localhost:5173"))
			.set_json(json!({ "text": SAMPLE }))
			.to_request();
		let resp = test::call_service(&app, req).await;

		assert!(resp.status().is_success());
		assert!(resp.headers().contains_key("access-control-allow-origin"));
	}

	#[actix_web::test]
	async fn processing_failure_carries_details() {
		let err = ApiError(HumanizeError::ProcessingFailure("matcher exploded".to_owned()));
		assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

		let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
		let body: Value = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(body, json!({ "error": "Humanization failed.", "details": "matcher exploded" }));
	}
}
