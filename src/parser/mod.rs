use log::{debug, info};

use crate::definition::{QuestionType, QuizModule, RawQuizChapter, RawQuizModule};
use crate::error::{ParseError, ParseWarning};
use crate::normalize::normalize;
use crate::settings::Settings;
use crate::validation::validate;

use self::question::parse_question;
use self::token::{find_description, question_marker, strip_comments, tokenize, QuestionMarker, Token};

pub mod ids;
mod question;
mod token;


const CHAPTER_ID_KEYS: &'static [&'static str] = &["ID", "CH_ID"];
const QUESTION_ID_KEYS: &'static [&'static str] = &["ID", "Q_ID"];

#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    pub success: bool,
    pub module: Option<QuizModule>,
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    /// Runs validation and normalization over a raw tree and merges the
    /// outcome with the conditions already collected while building it.
    pub fn from_raw(
        raw: RawQuizModule,
        mut errors: Vec<ParseError>,
        mut warnings: Vec<ParseWarning>,
        settings: &Settings,
    ) -> ParseResult {
        let report = validate(&raw, settings);
        errors.extend(report.errors.into_iter().map(ParseError::Validation));
        warnings.extend(report.warnings.into_iter().map(ParseWarning::Validation));

        let module = normalize(&raw);
        let summary = module.summary();
        info!(
            "Loaded quiz module `{}`: {} chapters, {} questions, {} errors, {} warnings",
            module.name,
            summary.chapters,
            summary.questions,
            errors.len(),
            warnings.len()
        );

        ParseResult {
            success: errors.is_empty(),
            module: Some(module),
            errors,
            warnings,
        }
    }

    fn aborted(error: ParseError) -> ParseResult {
        ParseResult {
            success: false,
            module: None,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

pub fn parse(document: &str) -> ParseResult {
    parse_with_settings(document, &Settings::default())
}

/// Parses a quiz document. A missing title aborts; any other problem is scoped
/// to its question, which is left out while the rest of the document parses.
pub fn parse_with_settings(document: &str, settings: &Settings) -> ParseResult {
    let document = document.replace("\r\n", "\n").replace('\r', "\n");
    let blocks = split_blocks(&document);

    let (title_block, content_blocks) = match blocks.split_first() {
        Some(split) => split,
        None => return ParseResult::aborted(ParseError::MissingTitle),
    };
    let mut raw = match parse_title_block(title_block) {
        Some(raw) => raw,
        None => return ParseResult::aborted(ParseError::MissingTitle),
    };

    let mut builder = ModuleBuilder {
        chapter_count: 0,
        question_count: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };
    for (index, block) in content_blocks.iter().enumerate() {
        builder.add_block(&mut raw, block, index + 1);
    }

    ParseResult::from_raw(raw, builder.errors, builder.warnings, settings)
}

/// Lines of each `---`-separated block, without blank blocks or leading and
/// trailing blank lines.
fn split_blocks(document: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in document.split('\n') {
        if tokenize(line) == Token::Rule {
            blocks.push(std::mem::replace(&mut current, Vec::new()));
        } else {
            current.push(line);
        }
    }
    blocks.push(current);

    blocks
        .into_iter()
        .map(|block| {
            let is_content = |line: &&str| !line.trim().is_empty();
            let start = block.iter().position(|l| is_content(l));
            let end = block.iter().rposition(|l| is_content(l));
            match (start, end) {
                (Some(start), Some(end)) => block[start..=end].to_vec(),
                _ => Vec::new(),
            }
        })
        .filter(|block| !block.is_empty())
        .collect()
}

fn parse_title_block(block: &[&str]) -> Option<RawQuizModule> {
    let title_index = block.iter().position(|line| match tokenize(line) {
        Token::Heading { level: 1, .. } => true,
        _ => false,
    })?;
    let title = match tokenize(block[title_index]) {
        Token::Heading { text, .. } => strip_comments(text, &[]).0,
        _ => return None,
    };
    if title.is_empty() {
        return None;
    }

    let mut raw = RawQuizModule::new(title);
    raw.description = find_description(&block[title_index + 1..]);
    Some(raw)
}

struct ModuleBuilder {
    chapter_count: usize,
    question_count: usize,
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
}

impl ModuleBuilder {
    fn add_block(&mut self, raw: &mut RawQuizModule, block: &[&str], block_number: usize) {
        let (heading_level, heading_text) = match tokenize(block[0]) {
            Token::Heading { level, text } => (level, text),
            _ => {
                debug!("Ignoring block {}: no heading", block_number);
                return;
            }
        };
        let body = &block[1..];

        if heading_level == 2 {
            self.add_chapter(raw, heading_text, body);
            return;
        }

        if heading_level == 3 {
            if let Some((marker, title)) = question_marker(heading_text) {
                let question_type = match marker {
                    QuestionMarker::MultipleChoice => QuestionType::Mcq,
                    QuestionMarker::TrueFalse => QuestionType::TrueFalse,
                };
                self.add_question(raw, question_type, title, body);
                return;
            }
        }

        debug!(
            "Ignoring block {}: `{}` is not a chapter or question heading",
            block_number, heading_text
        );
    }

    fn add_chapter(&mut self, raw: &mut RawQuizModule, heading_text: &str, body: &[&str]) {
        self.chapter_count += 1;
        self.question_count = 0;

        let (name, explicit_id) = strip_comments(heading_text, CHAPTER_ID_KEYS);
        let id = explicit_id.unwrap_or_else(|| ids::chapter_id(self.chapter_count, &name));
        debug!("Chapter `{}` ({})", name, id);

        let mut chapter = RawQuizChapter::new(id, name);
        chapter.description = find_description(body);
        raw.chapters.push(chapter);
    }

    fn add_question(
        &mut self,
        raw: &mut RawQuizModule,
        question_type: QuestionType,
        heading_title: &str,
        body: &[&str],
    ) {
        let (title, explicit_id) = strip_comments(heading_title, QUESTION_ID_KEYS);

        let chapter = match raw.chapters.last_mut() {
            Some(chapter) => chapter,
            None => {
                self.warnings.push(ParseWarning::QuestionOutsideChapter {
                    question_id: explicit_id.unwrap_or(title),
                });
                return;
            }
        };

        self.question_count += 1;
        let question_id =
            explicit_id.unwrap_or_else(|| ids::question_id(&chapter.id, self.question_count));
        debug!("Question {} in chapter {}", question_id, chapter.id);

        match parse_question(question_type, &question_id, &title, body) {
            Ok(parsed) => {
                chapter.questions.push(parsed.question);
                self.warnings.extend(parsed.warnings);
            }
            Err(error) => self.errors.push(error),
        }
    }
}
