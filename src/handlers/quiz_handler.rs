use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser, OptionalUser},
    errors::AppError,
    models::dto::request::{CreateQuizRequest, PaginationParams, SubmitAnswersRequest},
    models::dto::response::{MessageResponse, QuizDetailDto, QuizListResponse, QuizSummaryDto},
    services::GradingService,
};

/// Open listing. Admin callers see everything; everyone else sees the
/// quizzes published by admin accounts.
#[get("/api/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let viewer_role = viewer.0.map(|claims| claims.role);

    let (items, total) = state
        .quiz_service
        .list_quizzes(viewer_role, pagination.offset(), pagination.limit())
        .await?;

    Ok(HttpResponse::Ok().json(QuizListResponse {
        items: items.into_iter().map(QuizSummaryDto::from).collect(),
        total,
        offset: pagination.offset(),
        limit: pagination.limit(),
    }))
}

/// Quiz detail for taking. Correctness flags are stripped by the DTO.
#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizDetailDto::from(quiz)))
}

/// Privileged-only authoring. The whole question/answer graph arrives as
/// one structured payload.
#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0.sub, auth.0.role)
        .await?;

    Ok(HttpResponse::Created().json(QuizSummaryDto::from(quiz)))
}

/// Privileged-only deletion; removes the quiz with every question and
/// answer it owns.
#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Quiz '{}' deleted", id),
    }))
}

/// Scores a submission. Open to any caller.
#[post("/api/quizzes/{id}/grade")]
pub async fn grade_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    let result = GradingService::grade(&quiz, &request);
    Ok(HttpResponse::Ok().json(result))
}
