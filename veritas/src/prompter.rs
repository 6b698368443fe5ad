use inquire::{CustomUserError, Select, Text, validator::Validation};
use veritas_core::prompt::{Prompter, Validator};

/// Prompts on the terminal.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        Ok(Text::new(question).prompt()?)
    }

    fn ask_with_default(&mut self, question: &str, default: &str) -> anyhow::Result<String> {
        Ok(Text::new(question).with_default(default).prompt()?)
    }

    fn ask_with_validation(
        &mut self,
        question: &str,
        validator: Validator,
    ) -> anyhow::Result<String> {
        let answer = Text::new(question)
            .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
                Ok(match validator(input) {
                    Ok(()) => Validation::Valid,
                    Err(err) => Validation::Invalid(err.to_string().into()),
                })
            })
            .prompt()?;
        Ok(answer)
    }

    fn pick(&mut self, description: &str, choices: &[String]) -> anyhow::Result<String> {
        Ok(Select::new(description, choices.to_vec())
            .with_page_size(choices.len())
            .prompt()?)
    }
}
