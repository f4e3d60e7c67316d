use std::sync::Arc;

use crate::{
    config::Config,
    services::{model_service::GeminiModelService, quiz_service::QuizService, ModelService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_model_service(Arc::new(GeminiModelService::new(config)))
    }

    pub fn with_model_service(model_service: Arc<dyn ModelService>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(model_service)),
        }
    }
}
