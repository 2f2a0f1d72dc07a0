use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;


lazy_static! {
    static ref NON_SLUG_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]+").unwrap();
}

const MAX_SLUG_LENGTH: usize = 40;

fn slugify(text: &str) -> String {
    let text = unidecode(text).to_lowercase();
    let slug: String = NON_SLUG_CHARACTERS_REGEX.replace_all(&text, "-").into();
    let slug = slug.trim_matches('-');
    if slug.len() <= MAX_SLUG_LENGTH {
        return slug.to_owned();
    }
    slug[..MAX_SLUG_LENGTH].trim_end_matches('-').to_owned()
}

/// Id for a chapter without an explicit one, from its position in the document.
pub fn chapter_id(ordinal: usize, name: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        format!("ch{}", ordinal)
    } else {
        format!("ch{}-{}", ordinal, slug)
    }
}

pub fn question_id(chapter_id: &str, ordinal: usize) -> String {
    format!("{}-q{}", chapter_id, ordinal)
}

pub fn option_id(question_id: &str, ordinal: usize) -> String {
    format!("{}-opt{}", question_id, ordinal)
}
