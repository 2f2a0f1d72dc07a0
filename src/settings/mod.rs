use anyhow::{anyhow, Context, Result};
use std::env;


pub const MAX_DISPLAY_OPTIONS_VAR: &'static str = "QUIZ_MAX_DISPLAY_OPTIONS";
pub const STRICT_ANSWERS_VAR: &'static str = "QUIZ_STRICT_ANSWERS";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub max_display_options: usize,
    pub allow_unanswered_questions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_display_options: 5,
            allow_unanswered_questions: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(value) = lookup(MAX_DISPLAY_OPTIONS_VAR) {
            settings.max_display_options = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number, got `{}`", MAX_DISPLAY_OPTIONS_VAR, value))?;
        }

        if let Some(value) = lookup(STRICT_ANSWERS_VAR) {
            let strict = match value.trim().to_lowercase().as_ref() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(anyhow!(
                        "{} must be true or false, got `{}`",
                        STRICT_ANSWERS_VAR,
                        other
                    ))
                }
            };
            settings.allow_unanswered_questions = !strict;
        }

        Ok(settings)
    }
}
