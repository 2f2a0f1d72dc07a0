use itertools::Itertools;
use std::collections::HashMap;

use crate::definition::{
    true_false_options, QuestionType, QuizOption, RawQuizQuestion, FALSE_OPTION_ID,
    TRUE_OPTION_ID,
};
use crate::error::{ParseError, ParseWarning};
use crate::parser::ids;
use crate::parser::token::{tokenize, SectionKind, Token};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Preamble,
    Options,
    Correct,
    Explanation,
}

struct OptionDraft {
    label: String,
    lines: Vec<String>,
}

/// Question body collected section by section. Once `**Exp:**` is reached the
/// rest of the block belongs to the explanation verbatim.
struct QuestionDraft {
    section: Section,
    preamble: Vec<String>,
    options: Vec<OptionDraft>,
    correct: Vec<String>,
    explanation: Vec<String>,
    has_options: bool,
    has_correct: bool,
    has_explanation: bool,
}

impl QuestionDraft {
    fn new() -> Self {
        QuestionDraft {
            section: Section::Preamble,
            preamble: Vec::new(),
            options: Vec::new(),
            correct: Vec::new(),
            explanation: Vec::new(),
            has_options: false,
            has_correct: false,
            has_explanation: false,
        }
    }

    fn feed(&mut self, line: &str) {
        if self.section == Section::Explanation {
            self.explanation.push(line.to_owned());
            return;
        }

        match tokenize(line) {
            Token::Section { kind, rest } => {
                self.section = match kind {
                    SectionKind::Options => {
                        self.has_options = true;
                        Section::Options
                    }
                    SectionKind::Correct => {
                        self.has_correct = true;
                        Section::Correct
                    }
                    SectionKind::Explanation => {
                        self.has_explanation = true;
                        Section::Explanation
                    }
                };
                if !rest.is_empty() {
                    self.feed_section_line(rest);
                }
            }
            _ => self.feed_section_line(line),
        }
    }

    fn feed_section_line(&mut self, line: &str) {
        match self.section {
            Section::Preamble => self.preamble.push(line.to_owned()),
            Section::Correct => self.correct.push(line.to_owned()),
            Section::Explanation => self.explanation.push(line.to_owned()),
            Section::Options => match tokenize(line) {
                Token::OptionLabel { label, rest } => self.options.push(OptionDraft {
                    label,
                    lines: vec![rest.to_owned()],
                }),
                Token::Blank => {
                    if let Some(option) = self.options.last_mut() {
                        option.lines.push(String::new());
                    }
                }
                _ => {
                    // Text before the first label has nowhere to go.
                    if let Some(option) = self.options.last_mut() {
                        option.lines.push(line.trim().to_owned());
                    }
                }
            },
        }
    }

    fn question_text(&self, title: &str) -> String {
        let body = join_trimmed(&self.preamble);
        match (title.trim().is_empty(), body.is_empty()) {
            (_, true) => title.trim().to_owned(),
            (true, false) => body,
            (false, false) => format!("{}\n\n{}", title.trim(), body),
        }
    }
}

fn join_trimmed(lines: &[String]) -> String {
    lines.join("\n").trim().to_owned()
}

pub struct ParsedQuestion {
    pub question: RawQuizQuestion,
    pub warnings: Vec<ParseWarning>,
}

/// Parses the lines following a question heading.
pub fn parse_question(
    question_type: QuestionType,
    question_id: &str,
    title: &str,
    body: &[&str],
) -> Result<ParsedQuestion, ParseError> {
    let mut draft = QuestionDraft::new();
    for line in body {
        draft.feed(line);
    }

    let explanation = join_trimmed(&draft.explanation);
    if !draft.has_explanation || explanation.is_empty() {
        return Err(ParseError::MissingExplanation {
            question_id: question_id.to_owned(),
        });
    }

    let answer = join_trimmed(&draft.correct);
    if !draft.has_correct || answer.is_empty() {
        return Err(ParseError::MissingCorrectAnswer {
            question_id: question_id.to_owned(),
        });
    }

    let mut warnings = Vec::new();
    let (options, correct_option_ids) = match question_type {
        QuestionType::TrueFalse => {
            let answer = answer.replace('*', "").trim().to_lowercase();
            let correct_id = if answer == TRUE_OPTION_ID {
                TRUE_OPTION_ID
            } else if answer == FALSE_OPTION_ID {
                FALSE_OPTION_ID
            } else {
                return Err(ParseError::InvalidTrueFalseAnswer {
                    question_id: question_id.to_owned(),
                    answer,
                });
            };
            (true_false_options(), vec![correct_id.to_owned()])
        }
        QuestionType::Mcq => {
            if !draft.has_options {
                return Err(ParseError::MissingOptions {
                    question_id: question_id.to_owned(),
                });
            }
            if draft.options.len() < 2 {
                return Err(ParseError::TooFewOptions {
                    question_id: question_id.to_owned(),
                    found: draft.options.len(),
                });
            }

            let options: Vec<QuizOption> = draft
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    QuizOption::new(
                        ids::option_id(question_id, index + 1),
                        join_trimmed(&option.lines),
                    )
                })
                .collect();

            let (correct_option_ids, unresolved) =
                resolve_labels(&answer, &draft.options, &options);
            if correct_option_ids.is_empty() {
                return Err(ParseError::UnresolvedAnswers {
                    question_id: question_id.to_owned(),
                    labels: answer,
                });
            }
            if !unresolved.is_empty() {
                warnings.push(ParseWarning::PartiallyUnresolvedAnswers {
                    question_id: question_id.to_owned(),
                    labels: unresolved.join(", "),
                });
            }
            (options, correct_option_ids)
        }
    };

    Ok(ParsedQuestion {
        question: RawQuizQuestion {
            question_id: question_id.to_owned(),
            question_type: Some(question_type),
            question_text: draft.question_text(title),
            options,
            correct_option_ids: Some(correct_option_ids),
            explanation_text: explanation,
            ..Default::default()
        },
        warnings,
    })
}

/// Maps author labels (`A1, A3`) to the positional ids of the options carrying
/// them. Returns the resolved ids and the labels that matched nothing.
fn resolve_labels(
    answer: &str,
    drafts: &[OptionDraft],
    options: &[QuizOption],
) -> (Vec<String>, Vec<String>) {
    let mut ids_by_label: HashMap<&str, &str> = HashMap::new();
    for (draft, option) in drafts.iter().zip(options) {
        ids_by_label
            .entry(draft.label.as_str())
            .or_insert(option.option_id.as_str());
    }

    let labels = answer
        .replace('*', "")
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|l| l.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|l| !l.is_empty())
        .map(|l| l.to_uppercase())
        .unique()
        .collect_vec();

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    for label in labels {
        match ids_by_label.get(label.as_str()) {
            Some(id) => {
                let id = id.to_string();
                if !resolved.contains(&id) {
                    resolved.push(id);
                }
            }
            None => unresolved.push(label),
        }
    }
    (resolved, unresolved)
}
