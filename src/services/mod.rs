pub mod model_service;
pub mod prompt_builder;
pub mod quiz_parser;
pub mod quiz_renderer;
pub mod quiz_service;

pub use model_service::{GeminiModelService, ModelResponse, ModelService};
pub use quiz_service::QuizService;
