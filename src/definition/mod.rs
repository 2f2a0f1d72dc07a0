use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod question;

pub use question::{
    true_false_options, DisplayedOption, QuestionStatus, QuestionType, QuizOption, QuizQuestion,
    RawQuizQuestion, FALSE_OPTION_ID, TRUE_OPTION_ID,
};


#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizChapter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<QuizQuestion>,
    pub total_questions: u32,
    pub answered_questions: u32,
    pub correct_answers: u32,
    pub is_completed: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizModule {
    pub name: String,
    pub description: String,
    pub chapters: Vec<QuizChapter>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModuleSummary {
    pub chapters: usize,
    pub questions: usize,
    pub mcq_questions: usize,
    pub true_false_questions: usize,
    pub options: usize,
}

impl QuizModule {
    pub fn from_json(json: &str) -> Result<QuizModule> {
        serde_json::from_str(json).context("Could not read quiz module JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Could not serialize quiz module")
    }

    pub fn questions(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.chapters.iter().flat_map(|c| c.questions.iter())
    }

    pub fn find_question(&self, question_id: &str) -> Option<&QuizQuestion> {
        self.questions().find(|q| q.question_id == question_id)
    }

    pub fn summary(&self) -> ModuleSummary {
        let mut summary = ModuleSummary {
            chapters: self.chapters.len(),
            ..Default::default()
        };
        for question in self.questions() {
            summary.questions += 1;
            summary.options += question.options.len();
            match question.question_type {
                QuestionType::Mcq => summary.mcq_questions += 1,
                QuestionType::TrueFalse => summary.true_false_questions += 1,
            }
        }
        summary
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuizChapter {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<RawQuizQuestion>,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub answered_questions: Option<u32>,
    #[serde(default)]
    pub correct_answers: Option<u32>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl RawQuizChapter {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        RawQuizChapter {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

impl From<QuizChapter> for RawQuizChapter {
    fn from(chapter: QuizChapter) -> Self {
        RawQuizChapter {
            id: chapter.id,
            name: chapter.name,
            description: Some(chapter.description),
            questions: chapter.questions.into_iter().map(|q| q.into()).collect(),
            total_questions: Some(chapter.total_questions),
            answered_questions: Some(chapter.answered_questions),
            correct_answers: Some(chapter.correct_answers),
            is_completed: Some(chapter.is_completed),
        }
    }
}

/// Module tree before normalization, as produced by the parser or a lenient
/// JSON/CSV import.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuizModule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chapters: Vec<RawQuizChapter>,
}

impl RawQuizModule {
    pub fn new<N: Into<String>>(name: N) -> Self {
        RawQuizModule {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<RawQuizModule> {
        serde_json::from_str(json).context("Could not read quiz module JSON")
    }

    pub fn questions(&self) -> impl Iterator<Item = &RawQuizQuestion> {
        self.chapters.iter().flat_map(|c| c.questions.iter())
    }
}

impl From<QuizModule> for RawQuizModule {
    fn from(module: QuizModule) -> Self {
        RawQuizModule {
            name: module.name,
            description: Some(module.description),
            chapters: module.chapters.into_iter().map(|c| c.into()).collect(),
        }
    }
}
