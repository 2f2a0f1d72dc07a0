use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::Path;
use std::process;

use quiz_forge::import;
use quiz_forge::{OptionSelector, ParseResult, Settings};

const USAGE: &'static str = "Usage:
  quiz-forge check <path>
  quiz-forge export <path>
  quiz-forge preview <path> <question-id> [seed]";

fn load(path: &str, settings: &Settings) -> Result<ParseResult> {
    import::open(Path::new(path), settings)
}

fn check(path: &str, settings: &Settings) -> Result<bool> {
    let result = load(path, settings)?;
    if let Some(module) = &result.module {
        let summary = module.summary();
        println!("{}", module.name);
        println!(
            "{} chapters, {} questions ({} multiple choice, {} true/false), {} options",
            summary.chapters,
            summary.questions,
            summary.mcq_questions,
            summary.true_false_questions,
            summary.options
        );
    }
    for warning in result.warning_messages() {
        println!("warning: {}", warning);
    }
    for error in result.error_messages() {
        println!("error: {}", error);
    }
    Ok(result.success)
}

fn export(path: &str, settings: &Settings) -> Result<bool> {
    let result = load(path, settings)?;
    if !result.success {
        return Err(anyhow!(
            "{} has errors:\n{}",
            path,
            result.error_messages().join("\n")
        ));
    }
    let module = result.module.context("No module was produced")?;
    println!("{}", module.to_json()?);
    Ok(true)
}

fn preview(path: &str, question_id: &str, seed: Option<&String>, settings: &Settings) -> Result<bool> {
    let result = load(path, settings)?;
    let module = result.module.context("No module was produced")?;
    let question = module
        .find_question(question_id)
        .with_context(|| format!("No question with id `{}`", question_id))?;

    let mut selector = match seed {
        Some(seed) => {
            let seed = seed
                .parse()
                .with_context(|| format!("Seed must be a number, got `{}`", seed))?;
            OptionSelector::seeded(settings, seed)
        }
        None => OptionSelector::from_entropy(settings),
    };

    println!("{}", question.question_text);
    for (index, option) in selector.select(question)?.iter().enumerate() {
        let marker = if option.is_correct { "*" } else { " " };
        println!("{} {}. {}", marker, index + 1, option.option_text);
    }
    Ok(true)
}

fn run(args: &[String]) -> Result<bool> {
    let settings = Settings::from_env()?;
    match args {
        [command, path] if command == "check" => check(path, &settings),
        [command, path] if command == "export" => export(path, &settings),
        [command, path, question_id] if command == "preview" => {
            preview(path, question_id, None, &settings)
        }
        [command, path, question_id, seed] if command == "preview" => {
            preview(path, question_id, Some(seed), &settings)
        }
        _ => Err(anyhow!(USAGE)),
    }
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(2);
        }
    }
}
