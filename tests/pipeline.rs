use rand::rngs::StdRng;
use rand::SeedableRng;

use quiz_forge::{
    import, normalize, parse, select_display_options, validate, QuizModule, RawQuizModule,
    SelectionError, Settings,
};

const DOCUMENT: &'static str = "# Astronomy
Description: The night sky

---

## Planets <!-- ID:planets -->

---

### Q: Which of these are gas giants? <!-- ID:giants -->

**Options:**
- **A1:** Jupiter
- **A2:** Mars
- **A3:** Saturn
- **A4:** Venus
- **A5:** Mercury
- **A6:** Earth

**Correct:** A1, A3

**Exp:** Jupiter and Saturn are mostly hydrogen and helium.

---

### T/F: Pluto is a planet <!-- ID:pluto -->

**Correct:** False

**Exp:** It was reclassified as a dwarf planet in 2006.
";

fn parsed_module() -> QuizModule {
    let result = parse(DOCUMENT);
    assert!(result.success, "{:?}", result.errors);
    result.module.expect("Expected a module")
}

#[test]
fn parse_export_import_select() {
    let module = parsed_module();
    assert_eq!(module.description, "The night sky");

    let json = module.to_json().unwrap();
    let reimported = import::from_json(&json, &Settings::default()).unwrap();
    assert!(reimported.success);
    assert_eq!(reimported.module.as_ref(), Some(&module));

    let giants = module.find_question("giants").unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    for srs_level in 0..4 {
        let mut question = giants.clone();
        question.srs_level = srs_level;
        let displayed = select_display_options(&question, 5, &mut rng).unwrap();
        assert_eq!(displayed.len(), 5);

        let featured: Vec<&str> = displayed
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.option_text.as_str())
            .collect();
        let expected = if srs_level % 2 == 0 { "Jupiter" } else { "Saturn" };
        assert_eq!(featured, vec![expected]);
    }

    let pluto = module.find_question("pluto").unwrap();
    let displayed = select_display_options(pluto, 5, &mut rng).unwrap();
    assert_eq!(displayed.len(), 2);
    let correct: Vec<&str> = displayed
        .iter()
        .filter(|o| o.is_correct)
        .map(|o| o.option_id.as_str())
        .collect();
    assert_eq!(correct, vec!["false"]);
}

#[test]
fn normalize_is_idempotent_on_parsed_modules() {
    let module = parsed_module();
    let raw: RawQuizModule = module.clone().into();
    assert!(validate(&raw, &Settings::default()).is_valid);
    assert_eq!(normalize(&raw), module);
}

#[test]
fn corrupted_module_fails_validation_and_selection() {
    let mut module = parsed_module();
    module.chapters[0].questions[0].correct_option_ids = vec!["zzz".to_owned()];

    let report = validate(&module.clone().into(), &Settings::default());
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("zzz") && e.contains("giants")));

    let mut rng = StdRng::seed_from_u64(1);
    let result = select_display_options(&module.chapters[0].questions[0], 5, &mut rng);
    match result {
        Err(SelectionError::CorruptedReferences { question_id, .. }) => {
            assert_eq!(question_id, "giants")
        }
        other => panic!("Expected corruption error, got {:?}", other),
    }
}
