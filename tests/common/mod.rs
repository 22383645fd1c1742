use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use paintpro_backend::{
    app::{create_app, AppState},
    config::Settings,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_app(settings: Settings) -> Router {
    create_app(AppState::from_settings(settings))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    // 204 responses carry no body
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub fn money(value: &Value) -> f64 {
    value.as_f64().expect("expected a number")
}
