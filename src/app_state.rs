use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::module_store::{FileModuleStore, InMemoryModuleStore, ModuleStore},
    services::{
        ai_client::{CompletionClient, ProxyCompletionClient},
        model_service::ModelService,
        module_assembler::ModuleAssembler,
        study_session::StudySession,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub model_service: Arc<ModelService>,
    pub session: Arc<StudySession>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let model_service = Arc::new(ModelService::new(&config));

        let client: Arc<dyn CompletionClient> = match &config.proxy_url {
            Some(url) => {
                log::info!("Module generation will call the completion proxy at {}", url);
                Arc::new(ProxyCompletionClient::new(url))
            }
            None => model_service.clone(),
        };

        let store: Arc<dyn ModuleStore> = match &config.storage_dir {
            Some(dir) => Arc::new(FileModuleStore::open(dir.clone()).await?),
            None => Arc::new(InMemoryModuleStore::new()),
        };

        Ok(Self::from_parts(config, model_service, client, store))
    }

    pub fn from_parts(
        config: Config,
        model_service: Arc<ModelService>,
        client: Arc<dyn CompletionClient>,
        store: Arc<dyn ModuleStore>,
    ) -> Self {
        let assembler = Arc::new(ModuleAssembler::new(client));
        let session = Arc::new(StudySession::new(assembler, store));

        Self {
            model_service,
            session,
            config: Arc::new(config),
        }
    }
}
