//! Turns a validated raw module into the canonical one the runtime holds on to.
//!
//! Defaults used for anything the author or import left out:
//! - module and chapter descriptions: empty string
//! - question type: `mcq`
//! - options of a true/false question given none: the `true` and `false` pair
//! - chapter counters: `0`, `isCompleted`: `false`
//! - question status: `not_attempted`, answer counters and `srsLevel`: `0`
//! - `correctOptionIds`, `historyOfIncorrectSelections`, `shownIncorrectOptionIds`: empty
//!
//! Fields that were supplied are carried over untouched.

use crate::definition::{QuizChapter, QuizModule, RawQuizChapter, RawQuizModule};


pub fn normalize(module: &RawQuizModule) -> QuizModule {
    QuizModule {
        name: module.name.clone(),
        description: module.description.clone().unwrap_or_default(),
        chapters: module.chapters.iter().map(normalize_chapter).collect(),
    }
}

fn normalize_chapter(chapter: &RawQuizChapter) -> QuizChapter {
    QuizChapter {
        id: chapter.id.clone(),
        name: chapter.name.clone(),
        description: chapter.description.clone().unwrap_or_default(),
        questions: chapter.questions.iter().cloned().map(|q| q.into()).collect(),
        total_questions: chapter.total_questions.unwrap_or(0),
        answered_questions: chapter.answered_questions.unwrap_or(0),
        correct_answers: chapter.correct_answers.unwrap_or(0),
        is_completed: chapter.is_completed.unwrap_or(false),
    }
}
