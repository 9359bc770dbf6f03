mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post, put},
};

use std::{env, sync::Arc};

use handlers::rest;
use repository::Repository;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use service::NoteService;

const DEFAULT_PORT: u16 = 3001;

fn app(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/notes", post(rest::create_note))
        .route("/api/notes", get(rest::get_all_notes))
        .route("/api/notes/{id}", put(rest::update_note))
        .route("/api/notes/{id}", delete(rest::delete_note))
        .route("/api/notes/{id}", get(rest::get_one_note))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .fallback(rest::unknown_endpoint)
        .method_not_allowed_fallback(rest::unknown_endpoint)
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    // Store and service creation
    let repo = Arc::new(tokio::sync::Mutex::new(Repository::new()));
    let service = Arc::new(NoteService::new(repo));

    // Router config
    let router = app(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap_or_else(|e| {
        tracing::error!("Failed to bind port {port}: {e}");
        panic!("failed to bind port {port}: {e}");
    });

    // Starting router
    tracing::info!("Started listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}

async fn root() -> Response {
    (StatusCode::OK, Html("<h1>Hello World!</h1>")).into_response()
}
