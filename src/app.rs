use std::sync::Arc;
use axum::{
    extract::{DefaultBodyLimit, State},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
};
use crate::{
    config::Config,
    errors::response::panic_response,
    handlers::{self, PAGES},
    middleware,
    services::{Catalog, MetricsSource, WorkflowManager},
};

// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub workflows: WorkflowManager,
    pub catalog: Arc<Catalog>,
    pub metrics: Arc<dyn MetricsSource>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, workflows: WorkflowManager, metrics: Arc<dyn MetricsSource>) -> Self {
        Self {
            workflows,
            catalog: Arc::new(Catalog::new()),
            metrics,
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    // Page routes
    for (route, template) in PAGES {
        router = router.route(
            route,
            get(move |State(state): State<AppState>| handlers::render_page(state, template)),
        );
    }

    router
        // Dashboard data
        .route("/api/dashboard/stats", get(handlers::get_dashboard_stats))
        .route("/api/downloaders/status", get(handlers::get_downloaders_status))
        .route("/api/pt/sites", get(handlers::get_pt_sites))
        .route("/api/recommendations/hot", get(handlers::get_hot_recommendations))

        // Downloads
        .route("/api/download/start", post(handlers::start_download))
        .route("/api/download/queue", get(handlers::get_download_queue))

        // Workflow processing
        .route("/api/scan-directory", post(handlers::scan_directory))
        .route("/api/process/start", post(handlers::start_processing))
        .route("/api/process/status/:task_id", get(handlers::get_process_status))

        // Live metrics
        .route("/ws", get(handlers::live_feed))

        // Static files
        .nest_service("/static", ServeDir::new(&state.config.assets.static_dir))

        .layer(
            ServiceBuilder::new()
                .layer(from_fn(middleware::log_requests))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(state.config.limits.max_body_size)),
        )
        .with_state(state)
}
