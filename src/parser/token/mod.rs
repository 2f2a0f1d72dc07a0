use lazy_static::lazy_static;
use regex::Regex;


lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{1,6})\s+(.*?)\s*$").unwrap();
    static ref SECTION_REGEX: Regex = Regex::new(
        r"(?i)^\s*(?:[-*+]\s+)?\*\*\s*(options|opt|correct|ans|exp)\s*:\s*\*\*\s*(.*?)\s*$"
    )
    .unwrap();
    static ref OPTION_LABEL_REGEX: Regex =
        Regex::new(r"(?i)^\s*(?:[-*+]\s+)?\*\*\s*(a\d+)\s*:\s*\*\*\s*(.*?)\s*$").unwrap();
    static ref QUESTION_MARKER_REGEX: Regex = Regex::new(r"(?i)^(q|t/f)\s*:\s*(.*)$").unwrap();
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--(.*?)-->").unwrap();
    static ref ID_ANNOTATION_REGEX: Regex =
        Regex::new(r"(?i)^\s*(id|ch_id|q_id)\s*:\s*(\S+?)\s*$").unwrap();
    static ref DESCRIPTION_REGEX: Regex =
        Regex::new(r"(?i)^\s*(?:\*\*)?description:(?:\*\*)?\s*(.*?)\s*$").unwrap();
    static ref ITALIC_REGEX: Regex =
        Regex::new(r"^\s*(?:\*([^*]+)\*|_([^_]+)_)\s*$").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SectionKind {
    Options,
    Correct,
    Explanation,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    Blank,
    Rule,
    Heading { level: usize, text: &'a str },
    Section { kind: SectionKind, rest: &'a str },
    OptionLabel { label: String, rest: &'a str },
    Text(&'a str),
}

/// Classifies one line of the document. Lines never span tokens.
pub fn tokenize(line: &str) -> Token {
    if line.trim().is_empty() {
        return Token::Blank;
    }
    if line == "---" {
        return Token::Rule;
    }
    if let Some(captures) = HEADING_REGEX.captures(line) {
        if let (Some(hashes), Some(text)) = (captures.get(1), captures.get(2)) {
            return Token::Heading {
                level: hashes.as_str().len(),
                text: text.as_str(),
            };
        }
    }
    if let Some(captures) = SECTION_REGEX.captures(line) {
        if let (Some(name), Some(rest)) = (captures.get(1), captures.get(2)) {
            let kind = match name.as_str().to_lowercase().as_str() {
                "options" | "opt" => SectionKind::Options,
                "correct" | "ans" => SectionKind::Correct,
                _ => SectionKind::Explanation,
            };
            return Token::Section {
                kind,
                rest: rest.as_str(),
            };
        }
    }
    if let Some(captures) = OPTION_LABEL_REGEX.captures(line) {
        if let (Some(label), Some(rest)) = (captures.get(1), captures.get(2)) {
            return Token::OptionLabel {
                label: label.as_str().to_uppercase(),
                rest: rest.as_str(),
            };
        }
    }
    Token::Text(line)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionMarker {
    MultipleChoice,
    TrueFalse,
}

/// Splits `Q: title` / `T/F: title` heading text into its marker and title.
pub fn question_marker(heading_text: &str) -> Option<(QuestionMarker, &str)> {
    let captures = QUESTION_MARKER_REGEX.captures(heading_text)?;
    let marker = match captures.get(1)?.as_str().to_lowercase().as_str() {
        "q" => QuestionMarker::MultipleChoice,
        _ => QuestionMarker::TrueFalse,
    };
    Some((marker, captures.get(2)?.as_str()))
}

/// Heading text with its `<!-- ... -->` comments removed, plus the id found in
/// the first comment annotated with one of `keys` (e.g. `ID`, `CH_ID`).
pub fn strip_comments(text: &str, keys: &[&str]) -> (String, Option<String>) {
    let mut id = None;
    for captures in COMMENT_REGEX.captures_iter(text) {
        if id.is_some() {
            break;
        }
        let annotation = match captures.get(1) {
            Some(annotation) => annotation.as_str(),
            None => continue,
        };
        if let Some(found) = ID_ANNOTATION_REGEX.captures(annotation) {
            let key = found.get(1).map(|k| k.as_str().to_uppercase());
            if key.map_or(false, |k| keys.contains(&k.as_str())) {
                id = found.get(2).map(|v| v.as_str().to_owned());
            }
        }
    }
    let stripped = COMMENT_REGEX.replace_all(text, "").trim().to_owned();
    (stripped, id)
}

/// First `Description:` line or lone italic line among `lines`.
pub fn find_description(lines: &[&str]) -> Option<String> {
    for line in lines {
        if let Some(captures) = DESCRIPTION_REGEX.captures(line) {
            if let Some(text) = captures.get(1) {
                return Some(text.as_str().to_owned());
            }
        }
        if let Some(captures) = ITALIC_REGEX.captures(line) {
            if let Some(text) = captures.get(1).or_else(|| captures.get(2)) {
                return Some(text.as_str().trim().to_owned());
            }
        }
    }
    None
}
