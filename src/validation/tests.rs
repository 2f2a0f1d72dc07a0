use super::*;
use crate::definition::{true_false_options, QuizOption, RawQuizChapter};

struct ModuleBuilder {
    module: RawQuizModule,
}

impl ModuleBuilder {
    fn new() -> Self {
        ModuleBuilder {
            module: RawQuizModule::new("Example module"),
        }
    }

    fn name(mut self, name: &str) -> Self {
        self.module.name = name.to_owned();
        self
    }

    fn chapter(mut self, id: &str) -> Self {
        self.module.chapters.push(RawQuizChapter::new(id, "Example chapter"));
        self
    }

    fn question(mut self, question: RawQuizQuestion) -> Self {
        self.module
            .chapters
            .last_mut()
            .expect("Add a chapter first")
            .questions
            .push(question);
        self
    }

    fn build(self) -> RawQuizModule {
        self.module
    }
}

fn mcq(question_id: &str) -> RawQuizQuestion {
    RawQuizQuestion {
        question_id: question_id.to_owned(),
        question_type: Some(QuestionType::Mcq),
        question_text: "Pick one".to_owned(),
        options: vec![
            QuizOption::new(format!("{}-opt1", question_id), "One"),
            QuizOption::new(format!("{}-opt2", question_id), "Two"),
        ],
        correct_option_ids: Some(vec![format!("{}-opt2", question_id)]),
        explanation_text: "Two it is.".to_owned(),
        ..Default::default()
    }
}

fn true_false(question_id: &str, answer: &str) -> RawQuizQuestion {
    RawQuizQuestion {
        question_id: question_id.to_owned(),
        question_type: Some(QuestionType::TrueFalse),
        question_text: "The sky is blue".to_owned(),
        options: true_false_options(),
        correct_option_ids: Some(vec![answer.to_owned()]),
        explanation_text: "Rayleigh scattering.".to_owned(),
        ..Default::default()
    }
}

fn check(module: &RawQuizModule) -> ValidationReport {
    validate(module, &Settings::default())
}

#[test]
fn accepts_valid_module() {
    let module = ModuleBuilder::new()
        .chapter("c1")
        .question(mcq("q1"))
        .question(true_false("q2", "true"))
        .chapter("c2")
        .question(mcq("q3"))
        .build();
    let report = check(&module);
    assert!(report.is_valid, "{:?}", report.errors);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn rejects_empty_name() {
    let report = check(&ModuleBuilder::new().name("  ").build());
    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Module name must not be empty".to_owned()]);
}

#[test]
fn reports_duplicate_ids() {
    let mut question = mcq("q1");
    question.options[1].option_id = "q1-opt1".to_owned();
    question.correct_option_ids = Some(vec!["q1-opt1".to_owned()]);
    let module = ModuleBuilder::new()
        .chapter("c1")
        .question(question)
        .chapter("c1")
        .question(mcq("q1"))
        .build();

    let report = check(&module);
    assert!(!report.is_valid);
    assert!(report.errors.contains(&"Duplicate chapter id `c1`".to_owned()));
    assert!(report
        .errors
        .contains(&"Duplicate question id `q1` (chapter c1)".to_owned()));
    assert!(report
        .errors
        .contains(&"Question q1: duplicate option id `q1-opt1`".to_owned()));
}

#[test]
fn names_each_unresolved_correct_id() {
    let mut question = mcq("q1");
    question.correct_option_ids = Some(vec!["q1-opt2".to_owned(), "zzz".to_owned()]);
    let report = check(&ModuleBuilder::new().chapter("c1").question(question).build());
    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec!["Question q1: correct option id `zzz` does not match any option".to_owned()]
    );
}

#[test]
fn fully_unresolved_answers_are_an_error() {
    let mut question = mcq("q1");
    question.correct_option_ids = Some(vec!["zzz".to_owned()]);
    let report = check(&ModuleBuilder::new().chapter("c1").question(question).build());
    assert!(!report.is_valid);
    assert!(report
        .errors
        .contains(&"Question q1: none of the correct option ids [zzz] resolve to an option".to_owned()));
}

#[test]
fn missing_answers_are_a_warning_by_default() {
    let mut question = mcq("q1");
    question.correct_option_ids = None;
    let module = ModuleBuilder::new().chapter("c1").question(question).build();

    let report = check(&module);
    assert!(report.is_valid);
    assert_eq!(
        report.warnings,
        vec!["Question q1: no correct answer declared".to_owned()]
    );

    let strict = Settings {
        allow_unanswered_questions: false,
        ..Default::default()
    };
    let report = validate(&module, &strict);
    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec!["Question q1: no correct answer declared".to_owned()]
    );
}

#[test]
fn mcq_needs_two_options() {
    let mut question = mcq("q1");
    question.options.truncate(1);
    question.correct_option_ids = Some(vec!["q1-opt1".to_owned()]);
    let report = check(&ModuleBuilder::new().chapter("c1").question(question).build());
    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec!["Question q1: multiple choice questions need at least 2 options, found 1".to_owned()]
    );
}

#[test]
fn true_false_shape_is_enforced() {
    let mut wrong_options = true_false("q1", "true");
    wrong_options.options = vec![QuizOption::new("yes", "Yes"), QuizOption::new("true", "True")];
    let two_answers = RawQuizQuestion {
        correct_option_ids: Some(vec!["true".to_owned(), "false".to_owned()]),
        ..true_false("q2", "true")
    };
    let module = ModuleBuilder::new()
        .chapter("c1")
        .question(wrong_options)
        .question(two_answers)
        .build();

    let report = check(&module);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 2, "{:?}", report.errors);
    assert!(report.errors[0].starts_with("Question q1: true/false questions must have exactly"));
    assert!(report.errors[1].starts_with("Question q2: true/false questions need exactly one"));
}

#[test]
fn reports_every_defect_in_one_pass() {
    let mut broken = mcq("q2");
    broken.explanation_text = String::new();
    broken.correct_option_ids = Some(vec!["nope".to_owned()]);
    let module = ModuleBuilder::new()
        .name("")
        .chapter("c1")
        .question(mcq("q1"))
        .question(broken)
        .build();

    let report = check(&module);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 4, "{:?}", report.errors);
}

#[test]
fn does_not_modify_input() {
    let module = ModuleBuilder::new().chapter("c1").question(mcq("q1")).build();
    let before = module.clone();
    check(&module);
    assert_eq!(module, before);
}

#[test]
fn empty_answer_list_is_an_error() {
    let mut question = mcq("q1");
    question.correct_option_ids = Some(Vec::new());
    let report = check(&ModuleBuilder::new().chapter("c1").question(question).build());
    assert!(!report.is_valid);
    assert!(report.warnings.is_empty());
    assert_eq!(
        report.errors,
        vec!["Question q1: correct option ids were supplied but the list is empty".to_owned()]
    );
}

#[test]
fn true_false_needs_an_answer() {
    let mut absent = true_false("q1", "true");
    absent.correct_option_ids = None;
    let mut empty = true_false("q2", "true");
    empty.correct_option_ids = Some(Vec::new());
    let module = ModuleBuilder::new()
        .chapter("c1")
        .question(absent)
        .question(empty)
        .build();

    let report = check(&module);
    assert!(!report.is_valid);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(
        report.errors,
        vec![
            "Question q1: true/false questions need exactly one correct id out of `true`/`false`, found []".to_owned(),
            "Question q2: true/false questions need exactly one correct id out of `true`/`false`, found []".to_owned(),
        ]
    );
}

#[test]
fn true_false_options_may_be_left_out() {
    let mut question = true_false("q1", "false");
    question.options = Vec::new();
    let report = check(&ModuleBuilder::new().chapter("c1").question(question).build());
    assert!(report.is_valid, "{:?}", report.errors);
}
