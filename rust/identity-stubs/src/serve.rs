use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{extract_id, verify_id},
    lambda::Handler,
    InvocationEvent, StubError,
};

/// Run `handler` as if the request body had arrived in a Lambda event.
fn invoke(handler: Handler, body: String) -> Result<Response, StubError> {
    let response = handler(&InvocationEvent::new(Some(body)))?;
    let status = StatusCode::from_u16(response.status_code).map_err(StubError::internal)?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response())
}

pub async fn verify_id_route(body: String) -> Result<Response, StubError> {
    invoke(verify_id, body)
}

pub async fn ocr_route(body: String) -> Result<Response, StubError> {
    invoke(extract_id, body)
}

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/api/v0/verify-id", post(verify_id_route))
        .route("/api/v0/ocr", post(ocr_route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(listener: TcpListener) -> Result<(), StubError> {
    info!("Running on {:#?}", listener.local_addr());

    axum::serve(listener, router().into_make_service()).await?;

    Ok(())
}
