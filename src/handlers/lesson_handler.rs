use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedAccount,
    errors::AppError,
    models::dto::{
        request::QuizSubmission,
        response::{LessonDetail, LessonSummary},
    },
};

#[get("/api/lessons")]
pub async fn list_lessons(
    state: web::Data<Arc<AppState>>,
    _auth: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let summaries: Vec<LessonSummary> = state.catalog.all().iter().map(LessonSummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/api/lessons/{id}")]
pub async fn get_lesson(
    state: web::Data<Arc<AppState>>,
    lesson_id: web::Path<i64>,
    _auth: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let lesson_id = lesson_id.into_inner();
    let lesson = state
        .catalog
        .find(lesson_id)
        .ok_or_else(|| AppError::NotFound(format!("Lesson with id {} not found", lesson_id)))?;

    Ok(HttpResponse::Ok().json(LessonDetail::from(lesson)))
}

#[post("/api/lessons/{id}/quiz")]
pub async fn submit_quiz(
    state: web::Data<Arc<AppState>>,
    lesson_id: web::Path<i64>,
    submission: web::Json<QuizSubmission>,
    auth: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let result = state
        .progress_service
        .submit_quiz(&auth.0.sub, lesson_id.into_inner(), &submission.answers)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
