//! Content pipeline for quiz modules: parses the quiz markdown dialect,
//! validates and normalizes the resulting tree, and picks which answer options
//! to show a learner for a question.

pub mod definition;
pub mod error;
pub mod import;
pub mod normalize;
pub mod parser;
pub mod selection;
pub mod settings;
pub mod validation;

pub use definition::{
    DisplayedOption, QuestionStatus, QuestionType, QuizChapter, QuizModule, QuizOption,
    QuizQuestion, RawQuizChapter, RawQuizModule, RawQuizQuestion,
};
pub use error::{ParseError, ParseWarning, SelectionError};
pub use normalize::normalize;
pub use parser::{parse, parse_with_settings, ParseResult};
pub use selection::{select_display_options, OptionSelector};
pub use settings::Settings;
pub use validation::{validate, ValidationReport};
