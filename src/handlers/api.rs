use axum::{
    extract::{Form, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use crate::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::{DownloadForm, ScanForm};

pub async fn get_dashboard_stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.catalog.dashboard_stats
    }))
}

pub async fn get_downloaders_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.catalog.downloaders
    }))
}

pub async fn get_pt_sites(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.catalog.pt_sites
    }))
}

pub async fn get_hot_recommendations(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.catalog.hot_recommendations
    }))
}

pub async fn get_download_queue(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.catalog.download_queue
    }))
}

pub async fn start_download(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<DownloadForm>, AppError>,
) -> AppResult<Json<Value>> {
    tracing::info!("Starting download: {} with downloader: {}", form.magnet_url, form.downloader);

    Ok(Json(json!({
        "success": true,
        "message": "下载任务已开始",
        "task_id": state.catalog.download_ack()
    })))
}

pub async fn scan_directory(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ScanForm>, AppError>,
) -> AppResult<Json<Value>> {
    tracing::info!("Scanning directory: {}", form.path);

    let files = state.catalog.scan(&form.path);
    Ok(Json(json!({
        "success": true,
        "total": files.len(),
        "files": files
    })))
}
