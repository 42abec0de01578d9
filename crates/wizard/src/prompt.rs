//! Prompt/answer collector: renders a question and blocks until a valid
//! answer arrives.

use std::io::Write;

use tracing::debug;

use crate::{
    Error,
    choice::{Answer, Choice, Continue},
    input::{Input, LineSource},
};

/// A single question: prompt text, listed options, and whether an
/// "Other (specify)" free-text entry is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub allow_custom: bool,
}

impl Question {
    pub fn free_text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
            allow_custom: true,
        }
    }

    pub fn choice<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            allow_custom: true,
        }
    }

    #[must_use]
    pub fn without_custom(mut self) -> Self {
        self.allow_custom = false;
        self
    }

    /// Menu number of the "Other (specify)" entry, if offered.
    fn custom_slot(&self) -> Option<i64> {
        (self.allow_custom && !self.options.is_empty()).then(|| self.options.len() as i64 + 1)
    }
}

/// Why a prompt returned without an answer.
#[derive(Debug, thiserror::Error)]
pub enum Halt {
    #[error("interrupted by operator")]
    Interrupted,
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Fault(#[from] Error),
}

impl From<std::io::Error> for Halt {
    fn from(e: std::io::Error) -> Self {
        Self::Fault(e.into())
    }
}

/// Reads answers from a [`LineSource`] and writes prompts to `W`.
pub struct Prompter<S, W> {
    input: S,
    out: W,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub fn new(input: S, out: W) -> Self {
        Self { input, out }
    }

    /// The output stream, for advisory text between questions.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (S, W) {
        (self.input, self.out)
    }

    /// Ask `question` until a valid answer is given.
    ///
    /// Invalid input is answered with a hint and a fresh prompt; it never
    /// ends the call.
    pub async fn ask(&mut self, question: &Question) -> Result<String, Halt> {
        writeln!(self.out, "\n📋 {}", question.prompt)?;

        if question.options.is_empty() {
            return self.read_non_empty("\nYour answer: ").await;
        }

        writeln!(self.out, "\nAvailable options:")?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.out, "  {}. {option}", i + 1)?;
        }
        if let Some(slot) = question.custom_slot() {
            writeln!(self.out, "  {slot}. Other (specify)")?;
        }

        loop {
            let response = self.read("\nEnter your choice (number): ").await?;
            let Ok(choice) = response.parse::<i64>() else {
                debug!(response = %response, "non-numeric choice");
                writeln!(self.out, "❌ Please enter a valid number.")?;
                continue;
            };

            if let Some(selected) = usize::try_from(choice)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| question.options.get(idx))
            {
                writeln!(self.out, "✅ Selected: {selected}")?;
                return Ok(selected.clone());
            }

            if question.custom_slot() == Some(choice) {
                let custom = self.read_non_empty("Please specify: ").await?;
                writeln!(self.out, "✅ Custom choice: {custom}")?;
                return Ok(custom);
            }

            debug!(choice, "choice out of range");
            writeln!(self.out, "❌ Invalid choice. Please try again.")?;
        }
    }

    /// Ask a typed multiple-choice question.
    pub async fn ask_choice<C: Choice>(&mut self) -> Result<Answer<C>, Halt> {
        let text = self.ask(&C::question()).await?;
        Ok(match C::from_label(&text) {
            Some(listed) => Answer::Listed(listed),
            None => Answer::Custom(text),
        })
    }

    /// The between-steps question; `true` means carry on. Free text that
    /// says "No" counts as declining.
    pub async fn confirm_continue(&mut self) -> Result<bool, Halt> {
        Ok(match self.ask_choice::<Continue>().await? {
            Answer::Listed(choice) => choice == Continue::Yes,
            Answer::Custom(text) => !text.contains("No"),
        })
    }

    async fn read_non_empty(&mut self, label: &str) -> Result<String, Halt> {
        loop {
            let response = self.read(label).await?;
            if !response.is_empty() {
                return Ok(response);
            }
            writeln!(self.out, "❌ Please provide an answer.")?;
        }
    }

    async fn read(&mut self, label: &str) -> Result<String, Halt> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        match self.input.next_line().await {
            Input::Line(line) => Ok(line.trim().to_string()),
            Input::Closed => Err(Halt::InputClosed),
            Input::Interrupted => Err(Halt::Interrupted),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {
        super::*,
        crate::{choice::Scale, input::ScriptedInput},
        rstest::rstest,
    };

    fn three_options() -> Question {
        Question::choice("Pick one", ["alpha", "beta", "gamma"])
    }

    async fn ask_with(question: &Question, lines: &[&str]) -> (Result<String, Halt>, String, usize) {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(ScriptedInput::new(lines.iter().copied()), &mut out);
        let result = prompter.ask(question).await;
        let (input, _) = prompter.into_parts();
        let remaining = input.remaining();
        (result, String::from_utf8(out).unwrap(), remaining)
    }

    #[rstest]
    #[case("1", "alpha")]
    #[case("2", "beta")]
    #[case("3", "gamma")]
    #[case(" 3 ", "gamma")]
    #[tokio::test]
    async fn listed_number_returns_option(#[case] line: &str, #[case] expected: &str) {
        let (result, out, _) = ask_with(&three_options(), &[line]).await;
        assert_eq!(result.unwrap(), expected);
        assert!(out.contains(&format!("✅ Selected: {expected}")));
    }

    #[rstest]
    #[case("0", "❌ Invalid choice")]
    #[case("5", "❌ Invalid choice")]
    #[case("-1", "❌ Invalid choice")]
    #[case("two", "❌ Please enter a valid number")]
    #[case("", "❌ Please enter a valid number")]
    #[tokio::test]
    async fn invalid_choice_reprompts(#[case] bad: &str, #[case] hint: &str) {
        let (result, out, remaining) = ask_with(&three_options(), &[bad, "2"]).await;
        assert_eq!(result.unwrap(), "beta");
        assert!(out.contains(hint), "missing {hint:?} in {out}");
        assert_eq!(out.matches("Enter your choice (number): ").count(), 2);
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn other_entry_returns_free_text() {
        let (result, out, _) = ask_with(&three_options(), &["4", "  delta  "]).await;
        assert_eq!(result.unwrap(), "delta");
        assert!(out.contains("  4. Other (specify)"));
        assert!(out.contains("✅ Custom choice: delta"));
    }

    #[tokio::test]
    async fn empty_custom_answer_reprompts_free_text() {
        let (result, out, _) = ask_with(&three_options(), &["4", "", "   ", "delta"]).await;
        assert_eq!(result.unwrap(), "delta");
        assert_eq!(out.matches("Please specify: ").count(), 3);
        assert_eq!(out.matches("Enter your choice (number): ").count(), 1);
    }

    #[tokio::test]
    async fn other_slot_is_invalid_without_custom() {
        let question = three_options().without_custom();
        let (result, out, _) = ask_with(&question, &["4", "1"]).await;
        assert_eq!(result.unwrap(), "alpha");
        assert!(!out.contains("Other (specify)"));
        assert!(out.contains("❌ Invalid choice"));
    }

    #[tokio::test]
    async fn free_text_skips_empty_lines() {
        let question = Question::free_text("Project name?");
        let (result, out, _) = ask_with(&question, &["", "  ", "  quotes api "]).await;
        assert_eq!(result.unwrap(), "quotes api");
        assert_eq!(out.matches("❌ Please provide an answer.").count(), 2);
        assert!(!out.contains("Available options"));
    }

    #[tokio::test]
    async fn closed_input_halts() {
        let (result, _, _) = ask_with(&three_options(), &["9"]).await;
        assert!(matches!(result, Err(Halt::InputClosed)));
    }

    #[tokio::test]
    async fn interrupt_halts_mid_question() {
        let mut out = Vec::new();
        let input = ScriptedInput::new(["4"]).then_interrupt();
        let mut prompter = Prompter::new(input, &mut out);
        let result = prompter.ask(&three_options()).await;
        assert!(matches!(result, Err(Halt::Interrupted)));
    }

    #[tokio::test]
    async fn typed_answers_distinguish_listed_and_custom() {
        let mut out = Vec::new();
        let input = ScriptedInput::new(["3", "4", "a handful"]);
        let mut prompter = Prompter::new(input, &mut out);
        assert_eq!(
            prompter.ask_choice::<Scale>().await.unwrap(),
            Answer::Listed(Scale::Large)
        );
        assert_eq!(
            prompter.ask_choice::<Scale>().await.unwrap(),
            Answer::Custom("a handful".into())
        );
    }

    #[rstest]
    #[case(&["1"], true)]
    #[case(&["2"], false)]
    #[case(&["3", "sure, go ahead"], true)]
    #[case(&["3", "No, not yet"], false)]
    #[tokio::test]
    async fn continue_question(#[case] lines: &[&str], #[case] proceed: bool) {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(ScriptedInput::new(lines.iter().copied()), &mut out);
        assert_eq!(prompter.confirm_continue().await.unwrap(), proceed);
        assert!(String::from_utf8(out).unwrap().contains("  3. Other (specify)"));
    }
}
