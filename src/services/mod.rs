pub mod ai_client;
pub mod export;
pub mod model_service;
pub mod module_assembler;
pub mod normalizer;
pub mod placeholders;
pub mod render;
pub mod seed;
pub mod status_log;
pub mod study_session;
pub mod topic_bank;
