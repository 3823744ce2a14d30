use crate::errors::AppError;
use crate::export::{export_file_name, render_csv, to_export_rows};
use crate::models::{
    BehaviorsResponse, ChartView, Entry, LogRequest, ResetRequest, ResetResponse, Subject,
    SubjectInfo, UnknownSubject,
};
use crate::state::AppState;
use crate::stats::chart_view;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config))
}

pub async fn get_behaviors(State(state): State<AppState>) -> Json<BehaviorsResponse> {
    let subjects = Subject::ALL
        .into_iter()
        .map(|id| SubjectInfo {
            id,
            name: state.config.subject_name(id).to_string(),
        })
        .collect();

    Json(BehaviorsResponse {
        behaviors: state.config.behaviors.clone(),
        subjects,
    })
}

pub async fn get_log(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<Vec<Entry>>, AppError> {
    let subject = subject_from_path(&subject)?;
    let data = state.data.lock().await;
    Ok(Json(data.log(subject).to_vec()))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<ChartView>, AppError> {
    let subject = subject_from_path(&subject)?;
    let data = state.data.lock().await;
    Ok(Json(chart_view(subject, data.log(subject))))
}

pub async fn log_behavior(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<ChartView>, AppError> {
    let subject: Subject = payload
        .subject
        .parse()
        .map_err(|err: UnknownSubject| AppError::bad_request(err.to_string()))?;

    let behavior = payload.behavior.trim();
    if behavior.is_empty() {
        return Err(AppError::bad_request("behavior must not be empty"));
    }
    if !state.config.accepts(behavior) {
        return Err(AppError::bad_request(format!("unknown behavior '{behavior}'")));
    }

    let view = apply_log(&state, subject, behavior, payload.together, payload.note.trim()).await?;
    Ok(Json(view))
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let cleared = next.reset_all(payload.confirm);
    if cleared {
        persist_data(state.data_path(), &next).await?;
        *data = next;
        info!("cleared all behavior logs");
    }

    Ok(Json(ResetResponse { reset: cleared }))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let subject = subject_from_path(&subject)?;
    let body = {
        let data = state.data.lock().await;
        render_csv(&to_export_rows(data.log(subject)))
    };

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_file_name(subject)),
        ),
    ];
    Ok((headers, body))
}

async fn apply_log(
    state: &AppState,
    subject: Subject,
    behavior: &str,
    together: bool,
    note: &str,
) -> Result<ChartView, AppError> {
    let mut data = state.data.lock().await;
    // The live store only changes once the new state is on disk.
    let mut next = data.clone();
    let written = next.append(subject, behavior, together, note);

    persist_data(state.data_path(), &next).await?;
    *data = next;
    info!(%subject, behavior, together, written, "logged behavior");

    Ok(chart_view(subject, data.log(subject)))
}

fn subject_from_path(raw: &str) -> Result<Subject, AppError> {
    raw.parse()
        .map_err(|err: UnknownSubject| AppError::not_found(err.to_string()))
}
