use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const TRUE_OPTION_ID: &'static str = "true";
pub const FALSE_OPTION_ID: &'static str = "false";

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    TrueFalse,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Mcq
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    NotAttempted,
    Correct,
    Incorrect,
}

impl Default for QuestionStatus {
    fn default() -> Self {
        QuestionStatus::NotAttempted
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub option_id: String,
    pub option_text: String,
}

impl QuizOption {
    pub fn new<I: Into<String>, T: Into<String>>(option_id: I, option_text: T) -> Self {
        QuizOption {
            option_id: option_id.into(),
            option_text: option_text.into(),
        }
    }
}

/// The two options every true/false question carries.
pub fn true_false_options() -> Vec<QuizOption> {
    vec![
        QuizOption::new(TRUE_OPTION_ID, "True"),
        QuizOption::new(FALSE_OPTION_ID, "False"),
    ]
}

/// Canonical question. Every field is always present once normalized, which is
/// what makes the JSON form lossless.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub question_id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<QuizOption>,
    pub correct_option_ids: Vec<String>,
    pub explanation_text: String,
    pub status: QuestionStatus,
    pub times_answered_correctly: u32,
    pub times_answered_incorrectly: u32,
    pub srs_level: u32,
    pub history_of_incorrect_selections: Vec<String>,
    pub shown_incorrect_option_ids: BTreeSet<String>,
}

impl QuizQuestion {
    pub fn get_option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.option_id == option_id)
    }

    pub fn is_correct_option(&self, option_id: &str) -> bool {
        self.correct_option_ids.iter().any(|id| id == option_id)
    }
}

/// Question as it arrives from the parser or from a structured import. Anything
/// the author may leave out is optional here; `normalize` fills it in.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuizQuestion {
    pub question_id: String,
    #[serde(rename = "type", default)]
    pub question_type: Option<QuestionType>,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    /// `None` when the author never declared correct answers, which is not the
    /// same thing as declaring ids that do not exist.
    #[serde(default)]
    pub correct_option_ids: Option<Vec<String>>,
    #[serde(default)]
    pub explanation_text: String,
    #[serde(default)]
    pub status: Option<QuestionStatus>,
    #[serde(default)]
    pub times_answered_correctly: Option<u32>,
    #[serde(default)]
    pub times_answered_incorrectly: Option<u32>,
    #[serde(default)]
    pub srs_level: Option<u32>,
    #[serde(default)]
    pub history_of_incorrect_selections: Option<Vec<String>>,
    #[serde(default)]
    pub shown_incorrect_option_ids: Option<BTreeSet<String>>,
}

impl RawQuizQuestion {
    pub fn get_type(&self) -> QuestionType {
        self.question_type.unwrap_or_default()
    }

    /// Options as they will be once normalized. A true/false question imported
    /// without options gets the canonical pair.
    pub fn resolved_options(&self) -> Vec<QuizOption> {
        if self.options.is_empty() && self.get_type() == QuestionType::TrueFalse {
            true_false_options()
        } else {
            self.options.clone()
        }
    }
}

impl From<RawQuizQuestion> for QuizQuestion {
    fn from(raw_question: RawQuizQuestion) -> Self {
        let options = raw_question.resolved_options();
        QuizQuestion {
            question_type: raw_question.get_type(),
            question_id: raw_question.question_id,
            question_text: raw_question.question_text,
            options,
            correct_option_ids: raw_question.correct_option_ids.unwrap_or_default(),
            explanation_text: raw_question.explanation_text,
            status: raw_question.status.unwrap_or_default(),
            times_answered_correctly: raw_question.times_answered_correctly.unwrap_or(0),
            times_answered_incorrectly: raw_question.times_answered_incorrectly.unwrap_or(0),
            srs_level: raw_question.srs_level.unwrap_or(0),
            history_of_incorrect_selections: raw_question
                .history_of_incorrect_selections
                .unwrap_or_default(),
            shown_incorrect_option_ids: raw_question.shown_incorrect_option_ids.unwrap_or_default(),
        }
    }
}

impl From<QuizQuestion> for RawQuizQuestion {
    fn from(question: QuizQuestion) -> Self {
        RawQuizQuestion {
            question_id: question.question_id,
            question_type: Some(question.question_type),
            question_text: question.question_text,
            options: question.options,
            // Canonical questions store "never declared" as an empty list.
            correct_option_ids: if question.correct_option_ids.is_empty() {
                None
            } else {
                Some(question.correct_option_ids)
            },
            explanation_text: question.explanation_text,
            status: Some(question.status),
            times_answered_correctly: Some(question.times_answered_correctly),
            times_answered_incorrectly: Some(question.times_answered_incorrectly),
            srs_level: Some(question.srs_level),
            history_of_incorrect_selections: Some(question.history_of_incorrect_selections),
            shown_incorrect_option_ids: Some(question.shown_incorrect_option_ids),
        }
    }
}

/// Presentation-time projection of an option. Never stored in the module.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedOption {
    pub option_id: String,
    pub option_text: String,
    pub is_correct: bool,
}

impl DisplayedOption {
    pub fn new(option: &QuizOption, is_correct: bool) -> Self {
        DisplayedOption {
            option_id: option.option_id.clone(),
            option_text: option.option_text.clone(),
            is_correct,
        }
    }
}
