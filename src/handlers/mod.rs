pub mod page_handler;
pub mod quiz_handler;

pub use page_handler::{health_check, index};
pub use quiz_handler::generate_quiz;
