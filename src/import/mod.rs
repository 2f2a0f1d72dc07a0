use anyhow::{anyhow, Context, Result};
use serde::de;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::definition::{
    true_false_options, QuestionType, QuizOption, RawQuizChapter, RawQuizModule, RawQuizQuestion,
};
use crate::parser::{ids, parse_with_settings, ParseResult};
use crate::settings::Settings;


/// Loads a quiz from disk, picking the loader from the file extension. Every
/// path ends in the same validation and normalization.
pub fn open(source: &Path, settings: &Settings) -> Result<ParseResult> {
    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "json" => {
            let json = fs::read_to_string(source)
                .with_context(|| format!("Could not read {}", source.display()))?;
            from_json(&json, settings)
        }
        "csv" => {
            let file = fs::File::open(source)
                .with_context(|| format!("Could not open {}", source.display()))?;
            let name = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            from_csv(file, &name, settings)
        }
        _ => {
            let document = fs::read_to_string(source)
                .with_context(|| format!("Could not read {}", source.display()))?;
            Ok(parse_with_settings(&document, settings))
        }
    }
}

/// Structured import: a module in the interchange format, possibly missing
/// learner-progress fields.
pub fn from_json(json: &str, settings: &Settings) -> Result<ParseResult> {
    let raw = RawQuizModule::from_json(json)?;
    Ok(ParseResult::from_raw(raw, Vec::new(), Vec::new(), settings))
}

fn question_type_from_string<'de, D>(deserializer: D) -> Result<QuestionType, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?
        .trim()
        .to_lowercase()
        .as_str()
    {
        "mcq" | "q" | "" => Ok(QuestionType::Mcq),
        "true_false" | "tf" | "t/f" => Ok(QuestionType::TrueFalse),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"mcq, q, true_false, tf, t/f or blank",
        )),
    }
}

/// One row of a question sheet.
#[derive(Debug, Deserialize)]
pub struct CsvQuestion {
    pub chapter_id: String,
    pub chapter_name: String,
    pub question_id: String,
    #[serde(rename = "type", deserialize_with = "question_type_from_string")]
    pub question_type: QuestionType,
    pub question_text: String,
    #[serde(default)]
    pub options: String,
    pub correct: String,
    pub explanation: String,
}

fn split_cell(cell: &str) -> Vec<String> {
    cell.split('|')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_owned())
        .collect()
}

impl CsvQuestion {
    fn into_raw_question(self) -> Result<RawQuizQuestion> {
        let answers = split_cell(&self.correct);
        let (options, correct_option_ids) = match self.question_type {
            QuestionType::TrueFalse => {
                let answers: Vec<String> = answers.iter().map(|a| a.to_lowercase()).collect();
                (true_false_options(), answers)
            }
            QuestionType::Mcq => {
                let options: Vec<QuizOption> = split_cell(&self.options)
                    .into_iter()
                    .enumerate()
                    .map(|(index, text)| {
                        QuizOption::new(ids::option_id(&self.question_id, index + 1), text)
                    })
                    .collect();
                let correct_option_ids = answers
                    .iter()
                    .map(|label| {
                        resolve_csv_label(label, &options).ok_or_else(|| {
                            anyhow!(
                                "Question {}: answer `{}` is not an option label (A1, A2, ...)",
                                self.question_id,
                                label
                            )
                        })
                    })
                    .collect::<Result<Vec<String>>>()?;
                (options, correct_option_ids)
            }
        };

        Ok(RawQuizQuestion {
            question_id: self.question_id,
            question_type: Some(self.question_type),
            question_text: self.question_text,
            options,
            correct_option_ids: if answers.is_empty() {
                None
            } else {
                Some(correct_option_ids)
            },
            explanation_text: self.explanation,
            ..Default::default()
        })
    }
}

fn resolve_csv_label(label: &str, options: &[QuizOption]) -> Option<String> {
    let label = label.trim().to_uppercase();
    let ordinal: usize = label.strip_prefix('A')?.parse().ok()?;
    options
        .get(ordinal.checked_sub(1)?)
        .map(|o| o.option_id.clone())
}

/// Imports a question sheet. Rows are grouped into chapters in the order the
/// chapters first appear.
pub fn from_csv<R: Read>(reader: R, name: &str, settings: &Settings) -> Result<ParseResult> {
    let mut raw = RawQuizModule::new(name);
    let mut csv_reader = csv::Reader::from_reader(reader);
    for (index, row) in csv_reader.deserialize::<CsvQuestion>().enumerate() {
        let row = row.with_context(|| format!("Invalid question row {}", index + 1))?;

        let chapter_index = match raw.chapters.iter().position(|c| c.id == row.chapter_id) {
            Some(chapter_index) => chapter_index,
            None => {
                raw.chapters
                    .push(RawQuizChapter::new(row.chapter_id.clone(), row.chapter_name.clone()));
                raw.chapters.len() - 1
            }
        };

        let question = row.into_raw_question()?;
        raw.chapters[chapter_index].questions.push(question);
    }

    Ok(ParseResult::from_raw(raw, Vec::new(), Vec::new(), settings))
}
