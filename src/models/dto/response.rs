use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{ContentBlock, Lesson};

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LessonSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub question_count: usize,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        LessonSummary {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            category: lesson.category.clone(),
            question_count: lesson.question_count(),
        }
    }
}

/// A question as shown to the client. The correct answer stays server-side.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LessonDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: Vec<ContentBlock>,
    pub quiz: Vec<QuestionView>,
}

impl From<&Lesson> for LessonDetail {
    fn from(lesson: &Lesson) -> Self {
        LessonDetail {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            category: lesson.category.clone(),
            content: lesson.content.clone(),
            quiz: lesson
                .quiz
                .iter()
                .map(|q| QuestionView {
                    id: q.id,
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub lesson_id: i64,
    pub correct_count: usize,
    pub total: usize,
    pub xp_awarded: i64,
}

#[derive(Debug, Serialize)]
pub struct CompletedLessonView {
    pub lesson_id: i64,
    pub title: String,
    pub category: String,
    pub score: i64,
    pub max_score: usize,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub xp: i64,
    pub streak: i64,
    pub completed_lessons: Vec<CompletedLessonView>,
}
