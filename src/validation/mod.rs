use itertools::Itertools;
use std::collections::HashSet;

use crate::definition::{
    QuestionType, QuizOption, RawQuizModule, RawQuizQuestion, FALSE_OPTION_ID, TRUE_OPTION_ID,
};
use crate::settings::Settings;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks a raw module without touching it. Every check runs, so a single call
/// reports every defect.
pub fn validate(module: &RawQuizModule, settings: &Settings) -> ValidationReport {
    let mut validator = Validator {
        settings,
        errors: Vec::new(),
        warnings: Vec::new(),
    };
    validator.check_module(module);
    ValidationReport {
        is_valid: validator.errors.is_empty(),
        errors: validator.errors,
        warnings: validator.warnings,
    }
}

struct Validator<'a> {
    settings: &'a Settings,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl<'a> Validator<'a> {
    fn check_module(&mut self, module: &RawQuizModule) {
        if module.name.trim().is_empty() {
            self.errors.push("Module name must not be empty".to_owned());
        }

        let mut chapter_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for chapter in &module.chapters {
            if chapter.id.trim().is_empty() {
                self.errors
                    .push(format!("Chapter `{}` has an empty id", chapter.name));
            } else if !chapter_ids.insert(chapter.id.as_str()) {
                self.errors
                    .push(format!("Duplicate chapter id `{}`", chapter.id));
            }

            for question in &chapter.questions {
                if question.question_id.trim().is_empty() {
                    self.errors.push(format!(
                        "Chapter {}: question has an empty id",
                        chapter.id
                    ));
                } else if !question_ids.insert(question.question_id.as_str()) {
                    self.errors.push(format!(
                        "Duplicate question id `{}` (chapter {})",
                        question.question_id, chapter.id
                    ));
                }
                self.check_question(question);
            }
        }
    }

    fn check_question(&mut self, question: &RawQuizQuestion) {
        let id = &question.question_id;

        let options = question.resolved_options();
        let mut option_ids = HashSet::new();
        for option in &options {
            if !option_ids.insert(option.option_id.as_str()) {
                self.errors.push(format!(
                    "Question {}: duplicate option id `{}`",
                    id, option.option_id
                ));
            }
        }

        if question.explanation_text.trim().is_empty() {
            self.errors
                .push(format!("Question {}: explanation must not be empty", id));
        }

        match question.get_type() {
            QuestionType::Mcq => {
                if question.options.len() < 2 {
                    self.errors.push(format!(
                        "Question {}: multiple choice questions need at least 2 options, found {}",
                        id,
                        question.options.len()
                    ));
                }
            }
            QuestionType::TrueFalse => self.check_true_false_shape(question, &options),
        }

        self.check_correct_options(question, &option_ids);
    }

    fn check_true_false_shape(&mut self, question: &RawQuizQuestion, options: &[QuizOption]) {
        let ids: Vec<&str> = options
            .iter()
            .map(|o| o.option_id.as_str())
            .sorted()
            .collect();
        if ids != [FALSE_OPTION_ID, TRUE_OPTION_ID] {
            self.errors.push(format!(
                "Question {}: true/false questions must have exactly the options `true` and `false`, found [{}]",
                question.question_id,
                options.iter().map(|o| &o.option_id).join(", ")
            ));
        }

        let declared = question.correct_option_ids.as_deref().unwrap_or(&[]);
        let canonical = declared
            .iter()
            .filter(|id| id.as_str() == TRUE_OPTION_ID || id.as_str() == FALSE_OPTION_ID)
            .count();
        if declared.len() != 1 || canonical != 1 {
            self.errors.push(format!(
                "Question {}: true/false questions need exactly one correct id out of `true`/`false`, found [{}]",
                question.question_id,
                declared.join(", ")
            ));
        }
    }

    fn check_correct_options(&mut self, question: &RawQuizQuestion, option_ids: &HashSet<&str>) {
        let id = &question.question_id;
        let declared = match &question.correct_option_ids {
            Some(ids) if !ids.is_empty() => ids,
            // True/false answers are counted by the shape check.
            _ if question.get_type() == QuestionType::TrueFalse => return,
            None => {
                let message = format!("Question {}: no correct answer declared", id);
                if self.settings.allow_unanswered_questions {
                    self.warnings.push(message);
                } else {
                    self.errors.push(message);
                }
                return;
            }
            Some(_) => {
                self.errors.push(format!(
                    "Question {}: correct option ids were supplied but the list is empty",
                    id
                ));
                return;
            }
        };

        let mut resolved = 0;
        for correct_id in declared {
            if option_ids.contains(correct_id.as_str()) {
                resolved += 1;
            } else {
                self.errors.push(format!(
                    "Question {}: correct option id `{}` does not match any option",
                    id, correct_id
                ));
            }
        }

        if resolved == 0 {
            self.errors.push(format!(
                "Question {}: none of the correct option ids [{}] resolve to an option",
                id,
                declared.join(", ")
            ));
        }
    }
}
