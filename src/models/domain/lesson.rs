use serde::{Deserialize, Serialize};

/// A unit of educational content with an attached quiz. Loaded once at
/// startup from the lessons file and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Ordered display blocks, opaque to the engine.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub quiz: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default = "default_block_type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
}

fn default_block_type() -> String {
    "text".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Lesson {
    pub fn question_count(&self) -> usize {
        self.quiz.len()
    }
}

#[cfg(test)]
impl Lesson {
    pub fn test_lesson(id: i64) -> Self {
        Lesson {
            id,
            title: format!("Lesson {}", id),
            description: "A test lesson".to_string(),
            category: "testing".to_string(),
            content: vec![ContentBlock {
                block_type: "text".to_string(),
                text: "Some content".to_string(),
            }],
            quiz: vec![
                Question {
                    id: 1,
                    prompt: "First?".to_string(),
                    options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    correct_answer: "A".to_string(),
                },
                Question {
                    id: 2,
                    prompt: "Second?".to_string(),
                    options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    correct_answer: "B".to_string(),
                },
            ],
        }
    }
}
