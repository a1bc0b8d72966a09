use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_api::{parse_contact_id, status_for, ApiError, ContactPayload};
use rolodex_service::ServiceError;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::{error, info};

fn api_error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(status_for(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"message": err.message}))).into_response()
}

fn api_error_for(err: &ServiceError) -> ApiError {
    match err {
        ServiceError::Validation(_) => ApiError::missing_fields(),
        ServiceError::Conflict(_) => ApiError::duplicate_email(),
        ServiceError::NotFound(_) => ApiError::not_found(),
        _ => ApiError::internal(),
    }
}

fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let resp = (StatusCode::OK, "API is running...").into_response();
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render().await;
    let mut resp = (StatusCode::OK, body).into_response();
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    resp
}

pub(crate) async fn create_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactPayload>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/api/v1/contacts", "create contact");
    let draft = payload.into_draft();
    let resp = match state.service.create(&draft).await {
        Ok(contact) => Json(contact).into_response(),
        Err(err) => {
            if matches!(err, ServiceError::Store(_)) {
                error!(request_id = %request_id, "error adding contact: {err}");
            }
            api_error_response(&api_error_for(&err))
        }
    };
    let status = resp.status();
    state
        .metrics
        .observe_request("/api/v1/contacts", status, started.elapsed())
        .await;
    info!(request_id = %request_id, status = status.as_u16(), "request complete");
    with_request_id(resp, &request_id)
}

pub(crate) async fn list_contacts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = match state.service.list().await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(err) => {
            error!(request_id = %request_id, "error getting contacts: {err}");
            api_error_response(&ApiError::internal())
        }
    };
    let status = resp.status();
    state
        .metrics
        .observe_request("/api/v1/contacts", status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn update_contact_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<ContactPayload>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/api/v1/contacts/:id", "update contact");
    // A malformed id shares the missing-fields message on this route.
    let resp = match parse_contact_id(&raw_id) {
        Err(_) => api_error_response(&ApiError::missing_fields()),
        Ok(id) => match state.service.update(id, &payload.into_draft()).await {
            Ok(contact) => Json(contact).into_response(),
            Err(err) => {
                if matches!(err, ServiceError::Store(_)) {
                    error!(request_id = %request_id, "error updating contact: {err}");
                }
                api_error_response(&api_error_for(&err))
            }
        },
    };
    let status = resp.status();
    state
        .metrics
        .observe_request("/api/v1/contacts/:id", status, started.elapsed())
        .await;
    info!(request_id = %request_id, status = status.as_u16(), "request complete");
    with_request_id(resp, &request_id)
}

pub(crate) async fn delete_contact_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/api/v1/contacts/:id", "delete contact");
    let resp = match parse_contact_id(&raw_id) {
        Err(err) => api_error_response(&err),
        Ok(id) => match state.service.delete(id).await {
            Ok(()) => Json(json!({"message": "Contact deleted"})).into_response(),
            Err(err) => {
                if matches!(err, ServiceError::Store(_)) {
                    error!(request_id = %request_id, "error deleting contact: {err}");
                }
                api_error_response(&api_error_for(&err))
            }
        },
    };
    let status = resp.status();
    state
        .metrics
        .observe_request("/api/v1/contacts/:id", status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
