use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    content::LessonCatalog,
    errors::{AppError, AppResult},
    models::{
        domain::{Completion, Lesson},
        dto::response::{CompletedLessonView, ProfileResponse, QuizResultResponse},
    },
    repositories::{AccountRepository, CompletionRepository},
};

pub const XP_PER_CORRECT_ANSWER: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
}

/// Scores a submission against the lesson's answer key. Pure function of the
/// quiz and the answers: exact case-sensitive match, missing or unanswered
/// questions count as incorrect.
pub fn score_quiz(lesson: &Lesson, answers: &HashMap<i64, String>) -> ScoreResult {
    let correct_count = lesson
        .quiz
        .iter()
        .filter(|question| answers.get(&question.id) == Some(&question.correct_answer))
        .count();

    ScoreResult {
        correct_count,
        total: lesson.quiz.len(),
    }
}

pub struct ProgressService {
    catalog: Arc<LessonCatalog>,
    accounts: Arc<dyn AccountRepository>,
    completions: Arc<dyn CompletionRepository>,
}

impl ProgressService {
    pub fn new(
        catalog: Arc<LessonCatalog>,
        accounts: Arc<dyn AccountRepository>,
        completions: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            catalog,
            accounts,
            completions,
        }
    }

    /// Scores the submission, records the completion (latest attempt wins)
    /// and awards 10 XP per correct answer. Every submission awards XP again.
    pub async fn submit_quiz(
        &self,
        account_id: &str,
        lesson_id: i64,
        answers: &HashMap<i64, String>,
    ) -> AppResult<QuizResultResponse> {
        let lesson = self
            .catalog
            .find(lesson_id)
            .ok_or_else(|| AppError::NotFound(format!("Lesson with id {} not found", lesson_id)))?;

        let result = score_quiz(lesson, answers);
        let xp_awarded = result.correct_count as i64 * XP_PER_CORRECT_ANSWER;

        self.completions
            .upsert(Completion::new(
                account_id,
                lesson_id,
                result.correct_count as i64,
            ))
            .await?;

        if xp_awarded > 0 {
            self.accounts.add_xp(account_id, xp_awarded).await?;
        }

        log::info!(
            "account '{}' completed lesson {}: {}/{} (+{} xp)",
            account_id,
            lesson_id,
            result.correct_count,
            result.total,
            xp_awarded
        );

        Ok(QuizResultResponse {
            lesson_id,
            correct_count: result.correct_count,
            total: result.total,
            xp_awarded,
        })
    }

    /// The profile view: account progress plus completions joined against
    /// the catalog. Completions whose lesson left the catalog are omitted.
    pub async fn profile(&self, account_id: &str) -> AppResult<ProfileResponse> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Account with id '{}' not found", account_id))
            })?;

        let completions = self.completions.find_by_account(account_id).await?;

        let completed_lessons = completions
            .into_iter()
            .filter_map(|completion| {
                self.catalog
                    .find(completion.lesson_id)
                    .map(|lesson| CompletedLessonView {
                        lesson_id: lesson.id,
                        title: lesson.title.clone(),
                        category: lesson.category.clone(),
                        score: completion.score,
                        max_score: lesson.question_count(),
                        completed_at: completion.completed_at,
                    })
            })
            .collect();

        Ok(ProfileResponse {
            username: account.username,
            created_at: account.created_at,
            xp: account.xp,
            streak: account.streak,
            completed_lessons,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::models::domain::Account;
    use crate::repositories::{MockAccountRepository, MockCompletionRepository};

    fn answers(pairs: &[(i64, &str)]) -> HashMap<i64, String> {
        pairs
            .iter()
            .map(|(id, answer)| (*id, answer.to_string()))
            .collect()
    }

    #[test]
    fn test_score_quiz_counts_exact_matches() {
        // test_lesson: q1 -> "A", q2 -> "B"
        let lesson = Lesson::test_lesson(1);

        let result = score_quiz(&lesson, &answers(&[(1, "A"), (2, "C")]));
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_score_quiz_is_pure() {
        let lesson = Lesson::test_lesson(1);
        let submission = answers(&[(1, "A"), (2, "B")]);

        let first = score_quiz(&lesson, &submission);
        let second = score_quiz(&lesson, &submission);
        assert_eq!(first, second);
        assert_eq!(first.correct_count, 2);
    }

    #[test]
    fn test_score_quiz_empty_submission() {
        let lesson = Lesson::test_lesson(1);
        let result = score_quiz(&lesson, &HashMap::new());
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_score_quiz_is_case_sensitive() {
        let lesson = Lesson::test_lesson(1);
        let result = score_quiz(&lesson, &answers(&[(1, "a"), (2, "B")]));
        assert_eq!(result.correct_count, 1);
    }

    #[test]
    fn test_score_quiz_ignores_unknown_question_ids() {
        let lesson = Lesson::test_lesson(1);
        let result = score_quiz(&lesson, &answers(&[(99, "A"), (1, "A")]));
        assert_eq!(result.correct_count, 1);
    }

    fn service_with(
        accounts: MockAccountRepository,
        completions: MockCompletionRepository,
    ) -> ProgressService {
        let catalog =
            LessonCatalog::from_lessons(vec![Lesson::test_lesson(1), Lesson::test_lesson(2)])
                .unwrap();
        ProgressService::new(Arc::new(catalog), Arc::new(accounts), Arc::new(completions))
    }

    #[tokio::test]
    async fn test_submit_quiz_records_completion_and_awards_xp() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_add_xp()
            .with(eq("acct-1"), eq(10))
            .returning(|_, _| Ok(()));

        let mut completions = MockCompletionRepository::new();
        completions
            .expect_upsert()
            .withf(|c| c.account_id == "acct-1" && c.lesson_id == 1 && c.score == 1)
            .returning(Ok);

        let service = service_with(accounts, completions);
        let result = service
            .submit_quiz("acct-1", 1, &answers(&[(1, "A"), (2, "C")]))
            .await
            .unwrap();

        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.xp_awarded, 10);
    }

    #[tokio::test]
    async fn test_submit_quiz_zero_score_skips_xp() {
        let accounts = MockAccountRepository::new(); // add_xp must not be called

        let mut completions = MockCompletionRepository::new();
        completions
            .expect_upsert()
            .withf(|c| c.score == 0)
            .returning(Ok);

        let service = service_with(accounts, completions);
        let result = service
            .submit_quiz("acct-1", 1, &HashMap::new())
            .await
            .unwrap();

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.xp_awarded, 0);
    }

    #[tokio::test]
    async fn test_submit_quiz_unknown_lesson() {
        let accounts = MockAccountRepository::new();
        let completions = MockCompletionRepository::new();

        let service = service_with(accounts, completions);
        let result = service.submit_quiz("acct-1", 99, &HashMap::new()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_profile_joins_completions_to_catalog() {
        let mut account = Account::new("alice", "$argon2id$fake");
        account.xp = 30;
        account.streak = 2;
        let account_id = account.id.clone();
        let account_for_find = account.clone();

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_id()
            .returning(move |_| Ok(Some(account_for_find.clone())));

        let id_for_completions = account_id.clone();
        let mut completions = MockCompletionRepository::new();
        completions.expect_find_by_account().returning(move |_| {
            Ok(vec![
                Completion::new(&id_for_completions, 1, 2),
                // Lesson 42 left the catalog; the profile omits it.
                Completion::new(&id_for_completions, 42, 1),
            ])
        });

        let service = service_with(accounts, completions);
        let profile = service.profile(&account_id).await.unwrap();

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.xp, 30);
        assert_eq!(profile.streak, 2);
        assert_eq!(profile.completed_lessons.len(), 1);
        assert_eq!(profile.completed_lessons[0].lesson_id, 1);
        assert_eq!(profile.completed_lessons[0].max_score, 2);
    }

    #[tokio::test]
    async fn test_profile_unknown_account() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_find_by_id().returning(|_| Ok(None));
        let completions = MockCompletionRepository::new();

        let service = service_with(accounts, completions);
        let result = service.profile("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
