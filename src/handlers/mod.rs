pub mod module_handler;
pub mod proxy_handler;

use actix_web::web;

use crate::errors::AppError;

pub use module_handler::{
    download_latest_module, generate_module, get_latest_module, get_latest_module_text,
    get_module_history, get_status_log, health_check, list_topics, regenerate_module,
    save_latest_module,
};
pub use proxy_handler::complete_prompt;

/// Registers every route. Shared by `main` and handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(health_check)
    .service(list_topics)
    .service(complete_prompt)
    .service(generate_module)
    .service(regenerate_module)
    .service(get_latest_module)
    .service(get_latest_module_text)
    .service(save_latest_module)
    .service(get_module_history)
    .service(download_latest_module)
    .service(get_status_log);
}
