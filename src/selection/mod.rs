use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::definition::{DisplayedOption, QuizOption, QuizQuestion};
use crate::error::SelectionError;
use crate::settings::Settings;


/// Picks which options of `question` to show and in which order.
///
/// Exactly one correct option is featured, rotating with `srs_level` when the
/// question has several. Remaining slots go to incorrect options the learner has
/// not seen yet, then to ones they have seen, then to the other correct options.
/// The result is shuffled.
///
/// A question that declares correct ids none of which exist is corrupted and
/// yields `SelectionError::CorruptedReferences`. A question that declares no
/// correct ids at all only logs a warning, and every option comes back
/// flagged incorrect.
pub fn select_display_options<R: Rng + ?Sized>(
    question: &QuizQuestion,
    max_display_options: usize,
    rng: &mut R,
) -> Result<Vec<DisplayedOption>, SelectionError> {
    let (correct_options, incorrect_options): (Vec<&QuizOption>, Vec<&QuizOption>) = question
        .options
        .iter()
        .partition(|o| question.is_correct_option(&o.option_id));

    if !question.correct_option_ids.is_empty() && correct_options.is_empty() {
        return Err(SelectionError::CorruptedReferences {
            question_id: question.question_id.clone(),
            correct_option_ids: question.correct_option_ids.clone(),
        });
    }

    if question.correct_option_ids.is_empty() {
        warn!(
            "Question {} declares no correct answer, all options shown as incorrect",
            question.question_id
        );
    } else if correct_options.len() < question.correct_option_ids.len() {
        warn!(
            "Question {} has correct option ids that match no option, ignoring them",
            question.question_id
        );
    }

    if max_display_options == 0 {
        return Ok(Vec::new());
    }

    let (mut unshown, mut shown): (Vec<&QuizOption>, Vec<&QuizOption>) = incorrect_options
        .into_iter()
        .partition(|o| !question.shown_incorrect_option_ids.contains(&o.option_id));

    let mut selected = Vec::with_capacity(max_display_options);
    let mut other_correct = Vec::new();
    if !correct_options.is_empty() {
        let featured_index = question.srs_level as usize % correct_options.len();
        for (index, option) in correct_options.iter().enumerate() {
            if index == featured_index {
                selected.push(DisplayedOption::new(option, true));
            } else {
                other_correct.push(*option);
            }
        }
    }

    unshown.shuffle(rng);
    shown.shuffle(rng);
    other_correct.shuffle(rng);

    let fill = unshown
        .into_iter()
        .map(|o| (o, false))
        .chain(shown.into_iter().map(|o| (o, false)))
        .chain(other_correct.into_iter().map(|o| (o, true)));
    for (option, is_correct) in fill {
        if selected.len() >= max_display_options {
            break;
        }
        selected.push(DisplayedOption::new(option, is_correct));
    }

    selected.shuffle(rng);
    Ok(selected)
}

/// Selector bound to a random source and a display limit.
pub struct OptionSelector<R: Rng> {
    rng: R,
    max_display_options: usize,
}

impl<R: Rng> OptionSelector<R> {
    pub fn new(settings: &Settings, rng: R) -> Self {
        OptionSelector {
            rng,
            max_display_options: settings.max_display_options,
        }
    }

    pub fn select(&mut self, question: &QuizQuestion) -> Result<Vec<DisplayedOption>, SelectionError> {
        select_display_options(question, self.max_display_options, &mut self.rng)
    }
}

impl OptionSelector<StdRng> {
    pub fn from_entropy(settings: &Settings) -> Self {
        OptionSelector::new(settings, StdRng::from_entropy())
    }

    pub fn seeded(settings: &Settings, seed: u64) -> Self {
        OptionSelector::new(settings, StdRng::seed_from_u64(seed))
    }
}
