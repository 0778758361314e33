use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::GenerationRequest,
        response::{SaveModuleResponse, TopicsResponse},
    },
    services::topic_bank::{topics, DEFAULT_TOPIC},
};

#[get("/api/topics")]
pub async fn list_topics() -> HttpResponse {
    HttpResponse::Ok().json(TopicsResponse {
        topics: topics(),
        default_topic: DEFAULT_TOPIC,
    })
}

#[post("/api/modules")]
pub async fn generate_module(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let module = state.session.generate(&request).await?;
    Ok(HttpResponse::Created().json(module))
}

#[post("/api/modules/regenerate")]
pub async fn regenerate_module(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let module = state.session.regenerate(&request).await?;
    Ok(HttpResponse::Created().json(module))
}

#[get("/api/modules/latest")]
pub async fn get_latest_module(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let module = state
        .session
        .latest()
        .await
        .ok_or_else(|| AppError::NotFound("No module generated yet".to_string()))?;
    Ok(HttpResponse::Ok().json(module))
}

#[get("/api/modules/latest/text")]
pub async fn get_latest_module_text(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let text = state
        .session
        .render_latest()
        .await
        .ok_or_else(|| AppError::NotFound("No module generated yet".to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text))
}

#[post("/api/modules/latest/save")]
pub async fn save_latest_module(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let history_len = state.session.save_latest().await?;
    Ok(HttpResponse::Ok().json(SaveModuleResponse {
        message: "Saved locally in module history.".to_string(),
        history_len,
    }))
}

#[get("/api/modules/history")]
pub async fn get_module_history(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.session.history().await)
}

#[get("/api/modules/latest/download")]
pub async fn download_latest_module(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let exported = state.session.export_latest().await?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(exported.file_name)],
        })
        .body(exported.contents))
}

#[get("/api/log")]
pub async fn get_status_log(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.session.log_entries().await)
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_configured": state.model_service.has_credential(),
        "generating": state.session.is_generating(),
    }))
}
