use std::future::Future;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_link_handler, delete_link_handler, health_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        // The API is consumed by browser front ends on other origins, so
        // every route carries permissive CORS headers and preflights are
        // answered before routing.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(create_link_handler))
            .route("/{code}", get(redirect_handler).delete(delete_link_handler))
            .route("/{code}/stats", get(stats_handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Serves the router on the listener until `shutdown` completes,
    /// then drains in-flight requests before returning.
    pub async fn serve(
        listener: tokio::net::TcpListener,
        state: AppState,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> std::io::Result<()> {
        axum::serve(listener, Self::router(state))
            .with_graceful_shutdown(shutdown)
            .await
    }
}
