use axum::{
    extract::{Form, Path, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use crate::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::ProcessForm;

pub async fn start_processing(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ProcessForm>, AppError>,
) -> AppResult<Json<Value>> {
    let task_id = state.workflows.start(form.into_config());
    tracing::debug!("{} workflows tracked", state.workflows.len());

    Ok(Json(json!({
        "success": true,
        "task_id": task_id,
        "message": "智能处理任务已开始"
    })))
}

pub async fn get_process_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<Value>> {
    let status = state.workflows.poll(&task_id);
    tracing::debug!("Task {} status: {:?} at {}%", task_id, status.status(), status.progress());

    Ok(Json(json!({
        "success": true,
        "status": serde_json::to_value(&status)?
    })))
}
