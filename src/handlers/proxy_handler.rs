use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ProxyRequest, response::ProxyResponse},
    services::ai_client::AiClientError,
};

/// Forwards one prompt to the upstream model and returns `{"output": ...}`.
///
/// The credential check runs before the body is inspected, so an unconfigured
/// server answers 500 even for malformed requests.
#[post("/api/deepseek")]
pub async fn complete_prompt(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if !state.model_service.has_credential() {
        log::error!("Rejecting completion request: DEEPSEEK_API_KEY is not configured");
        return Err(AiClientError::MissingCredential.into());
    }

    let request = if body.is_empty() {
        ProxyRequest::default()
    } else {
        serde_json::from_slice::<ProxyRequest>(&body).map_err(|e| {
            log::warn!("Malformed completion request body: {}", e);
            AppError::InternalError(format!("Invalid request body: {}", e))
        })?
    };

    let prompt = request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(AppError::MissingPrompt)?;

    let output = state.model_service.complete(&prompt).await?;
    Ok(HttpResponse::Ok().json(ProxyResponse { output }))
}
