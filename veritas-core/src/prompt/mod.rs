//! The only I/O the builder depends on. Any terminal, GUI or scripted source of
//! answers can stand behind [`Prompter`].

pub use scripted::ScriptedPrompter;

mod scripted;

/// Accepts a response or explains why it is rejected.
pub type Validator = fn(&str) -> anyhow::Result<()>;

pub trait Prompter {
    fn ask(&mut self, question: &str) -> anyhow::Result<String>;

    /// A blank response yields `default`.
    fn ask_with_default(&mut self, question: &str, default: &str) -> anyhow::Result<String>;

    /// Keeps asking until `validator` accepts the response.
    fn ask_with_validation(
        &mut self,
        question: &str,
        validator: Validator,
    ) -> anyhow::Result<String>;

    /// Returns one of `choices`.
    fn pick(&mut self, description: &str, choices: &[String]) -> anyhow::Result<String>;
}
