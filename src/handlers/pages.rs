use axum::response::Html;
use crate::app::AppState;
use crate::errors::{AppError, AppResult};

/// Page routes and the template file each one serves.
pub const PAGES: [(&str, &str); 7] = [
    ("/", "index_enhanced.html"),
    ("/download", "download.html"),
    ("/pt", "pt.html"),
    ("/media", "media.html"),
    ("/tasks", "tasks.html"),
    ("/plugins", "plugins.html"),
    ("/settings", "settings.html"),
];

// Pages are shipped as-is; the front end fetches its data from /api.
pub async fn render_page(state: AppState, template: &'static str) -> AppResult<Html<String>> {
    let path = state.config.assets.templates_dir.join(template);

    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read template {}: {}", path.display(), e);
            AppError::Template(e)
        })?;

    tracing::debug!("Serving page {}", template);
    Ok(Html(html))
}
