use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::QuizOutcome,
        dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
    },
};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    log::info!(
        "[{}] Generating quiz from {} chars of notes",
        request_id,
        request.notes.chars().count()
    );

    let outcome = state.quiz_service.generate_quiz(&request.notes).await?;
    let response = match outcome {
        QuizOutcome::Warning { .. } => {
            HttpResponse::BadRequest().json(GenerateQuizResponse::from(outcome))
        }
        _ => HttpResponse::Ok().json(GenerateQuizResponse::from(outcome)),
    };
    Ok(response)
}
