use thiserror::Error;

/// Fatal conditions. Apart from `MissingTitle`, each one is scoped to a single
/// question and does not stop the rest of the document from parsing.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("Document must start with a title (`# <title>`)")]
    MissingTitle,

    #[error("Question {question_id}: missing explanation (`**Exp:**`)")]
    MissingExplanation { question_id: String },

    #[error("Question {question_id}: missing correct answer (`**Correct:**` or `**Ans:**`)")]
    MissingCorrectAnswer { question_id: String },

    #[error("Question {question_id}: missing options section (`**Options:**` or `**Opt:**`)")]
    MissingOptions { question_id: String },

    #[error("Question {question_id}: needs at least 2 options, found {found}")]
    TooFewOptions { question_id: String, found: usize },

    #[error("Question {question_id}: true/false answer must be `true` or `false`, found `{answer}`")]
    InvalidTrueFalseAnswer { question_id: String, answer: String },

    #[error("Question {question_id}: none of the correct answer labels `{labels}` match an option")]
    UnresolvedAnswers { question_id: String, labels: String },

    #[error("{0}")]
    Validation(String),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseWarning {
    #[error("Question {question_id} appears before any chapter and was skipped")]
    QuestionOutsideChapter { question_id: String },

    #[error("Question {question_id}: ignored unknown correct answer labels `{labels}`")]
    PartiallyUnresolvedAnswers { question_id: String, labels: String },

    #[error("{0}")]
    Validation(String),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SelectionError {
    #[error("Question {question_id}: correct option ids [{}] match no option", .correct_option_ids.join(", "))]
    CorruptedReferences {
        question_id: String,
        correct_option_ids: Vec<String>,
    },
}
