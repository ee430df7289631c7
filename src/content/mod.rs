use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::{
    config::ContentFallback,
    errors::{AppError, AppResult},
    models::domain::{ContentBlock, Lesson, Question},
};

/// Immutable lesson catalog, loaded once at startup. Reloading requires a
/// process restart.
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    index: HashMap<i64, usize>,
}

impl LessonCatalog {
    pub fn load(path: impl AsRef<Path>, fallback: ContentFallback) -> AppResult<Self> {
        let path = path.as_ref();

        let parsed = fs::read_to_string(path)
            .map_err(|e| {
                AppError::InternalError(format!(
                    "failed to read lessons file '{}': {}",
                    path.display(),
                    e
                ))
            })
            .and_then(|raw| {
                serde_json::from_str::<Vec<Lesson>>(&raw).map_err(|e| {
                    AppError::InternalError(format!(
                        "failed to parse lessons file '{}': {}",
                        path.display(),
                        e
                    ))
                })
            });

        let lessons = match parsed {
            Ok(lessons) => lessons,
            Err(e) => match fallback {
                ContentFallback::Fail => return Err(e),
                ContentFallback::Placeholder => {
                    log::warn!("{}; serving placeholder lesson instead", e);
                    vec![placeholder_lesson()]
                }
            },
        };

        Self::from_lessons(lessons)
    }

    pub fn from_lessons(lessons: Vec<Lesson>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(lessons.len());
        for (pos, lesson) in lessons.iter().enumerate() {
            if index.insert(lesson.id, pos).is_some() {
                return Err(AppError::InternalError(format!(
                    "duplicate lesson id {} in catalog",
                    lesson.id
                )));
            }

            let mut question_ids = HashSet::with_capacity(lesson.quiz.len());
            for question in &lesson.quiz {
                if !question_ids.insert(question.id) {
                    return Err(AppError::InternalError(format!(
                        "duplicate question id {} in lesson {}",
                        question.id, lesson.id
                    )));
                }
            }
        }

        log::info!("loaded {} lessons into the catalog", lessons.len());
        Ok(Self { lessons, index })
    }

    pub fn find(&self, lesson_id: i64) -> Option<&Lesson> {
        self.index.get(&lesson_id).map(|&pos| &self.lessons[pos])
    }

    pub fn all(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn placeholder_lesson() -> Lesson {
    Lesson {
        id: 1,
        title: "Welcome".to_string(),
        description: "The lesson catalog could not be loaded.".to_string(),
        category: "general".to_string(),
        content: vec![ContentBlock {
            block_type: "text".to_string(),
            text: "Lesson content is temporarily unavailable. Please check back later."
                .to_string(),
        }],
        quiz: Vec::<Question>::new(),
    }
}
