use super::*;

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn parses_multiple_choice() {
    let body = lines(
        "Some context.\n\n**Options:**\n- **A1:** Paris\n- **A2:** Rome\n  still Rome\n**A3:** Berlin\n\n**Correct:** A1, a3\n\n**Exp:** Capitals.\n\nMore detail.",
    );
    let parsed = parse_question(QuestionType::Mcq, "q1", "Capital?", &body).unwrap();
    let question = parsed.question;
    assert!(parsed.warnings.is_empty());
    assert_eq!(question.question_text, "Capital?\n\nSome context.");
    assert_eq!(
        question.options,
        vec![
            QuizOption::new("q1-opt1", "Paris"),
            QuizOption::new("q1-opt2", "Rome\nstill Rome"),
            QuizOption::new("q1-opt3", "Berlin"),
        ]
    );
    assert_eq!(
        question.correct_option_ids,
        Some(vec!["q1-opt1".to_owned(), "q1-opt3".to_owned()])
    );
    assert_eq!(question.explanation_text, "Capitals.\n\nMore detail.");
}

#[test]
fn ids_follow_position_not_label() {
    let body = lines("**Options:**\n**A2:** second label first\n**A1:** first label second\n**Correct:** A1\n**Exp:** x");
    let question = parse_question(QuestionType::Mcq, "q1", "t", &body)
        .unwrap()
        .question;
    assert_eq!(question.correct_option_ids, Some(vec!["q1-opt2".to_owned()]));
}

#[test]
fn explanation_swallows_the_rest() {
    let body = lines("**Opt:**\n**A1:** x\n**A2:** y\n**Exp:** see below\n**Ans:** A1");
    let result = parse_question(QuestionType::Mcq, "q1", "t", &body);
    assert_eq!(
        result.err(),
        Some(ParseError::MissingCorrectAnswer {
            question_id: "q1".to_owned()
        })
    );
}

#[test]
fn reports_fatal_conditions() {
    let missing_exp = lines("**Options:**\n**A1:** x\n**A2:** y\n**Correct:** A1");
    assert_eq!(
        parse_question(QuestionType::Mcq, "q1", "t", &missing_exp).err(),
        Some(ParseError::MissingExplanation {
            question_id: "q1".to_owned()
        })
    );

    let one_option = lines("**Options:**\n**A1:** x\n**Correct:** A1\n**Exp:** e");
    assert_eq!(
        parse_question(QuestionType::Mcq, "q1", "t", &one_option).err(),
        Some(ParseError::TooFewOptions {
            question_id: "q1".to_owned(),
            found: 1
        })
    );

    let no_options = lines("**Correct:** A1\n**Exp:** e");
    assert_eq!(
        parse_question(QuestionType::Mcq, "q1", "t", &no_options).err(),
        Some(ParseError::MissingOptions {
            question_id: "q1".to_owned()
        })
    );

    let bad_labels = lines("**Options:**\n**A1:** x\n**A2:** y\n**Correct:** A7, B\n**Exp:** e");
    assert_eq!(
        parse_question(QuestionType::Mcq, "q1", "t", &bad_labels).err(),
        Some(ParseError::UnresolvedAnswers {
            question_id: "q1".to_owned(),
            labels: "A7, B".to_owned()
        })
    );
}

#[test]
fn drops_unknown_labels_with_warning() {
    let body = lines("**Options:**\n**A1:** x\n**A2:** y\n**Correct:** A2, A9\n**Exp:** e");
    let parsed = parse_question(QuestionType::Mcq, "q1", "t", &body).unwrap();
    assert_eq!(
        parsed.question.correct_option_ids,
        Some(vec!["q1-opt2".to_owned()])
    );
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::PartiallyUnresolvedAnswers {
            question_id: "q1".to_owned(),
            labels: "A9".to_owned()
        }]
    );
}

#[test]
fn parses_true_false() {
    let body = lines("Think about it.\n**Correct:** **True**\n**Exp:** It is.");
    let question = parse_question(QuestionType::TrueFalse, "tf1", "Water is wet", &body)
        .unwrap()
        .question;
    assert_eq!(question.question_text, "Water is wet\n\nThink about it.");
    assert_eq!(question.options, true_false_options());
    assert_eq!(question.correct_option_ids, Some(vec!["true".to_owned()]));

    let body = lines("**Ans:** maybe\n**Exp:** e");
    assert_eq!(
        parse_question(QuestionType::TrueFalse, "tf1", "t", &body).err(),
        Some(ParseError::InvalidTrueFalseAnswer {
            question_id: "tf1".to_owned(),
            answer: "maybe".to_owned()
        })
    );
}

#[test]
fn ignores_punctuation_around_labels() {
    let body = lines("**Options:**\n**A1:** x\n**A2:** y\n**A3:** z\n**Correct:** (A1); A3.\n**Exp:** e");
    let parsed = parse_question(QuestionType::Mcq, "q1", "t", &body).unwrap();
    assert!(parsed.warnings.is_empty());
    assert_eq!(
        parsed.question.correct_option_ids,
        Some(vec!["q1-opt1".to_owned(), "q1-opt3".to_owned()])
    );
}
