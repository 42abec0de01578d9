#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{self, Write};

use {
    rstest::rstest,
    stackplan_wizard::{
        Outcome, ScriptedInput, SessionPersister, SessionRecord, Sequencer, Step, WizardOptions,
    },
};

/// Number of questions each step asks, in step order.
const QUESTIONS_PER_STEP: [usize; 8] = [1, 2, 2, 2, 2, 2, 2, 2];

/// Answer "1" to every question of the first `steps` steps, continuing
/// after each one that is not last.
fn answers_through(steps: usize) -> Vec<&'static str> {
    let mut lines = Vec::new();
    for (i, questions) in QUESTIONS_PER_STEP.iter().take(steps).enumerate() {
        lines.extend(std::iter::repeat_n("1", *questions));
        if i + 1 < QUESTIONS_PER_STEP.len() {
            lines.push("1");
        }
    }
    lines
}

struct Harness {
    dir: tempfile::TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn persister(&self) -> SessionPersister {
        SessionPersister::new(self.dir.path().join("backend_assistant_session.json"))
    }

    fn snapshot(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.persister().path()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    async fn run(&self, input: ScriptedInput) -> (stackplan_wizard::RunSummary, String) {
        let mut out = Vec::new();
        let summary = Sequencer::new(input, &mut out, self.persister(), WizardOptions::default())
            .run()
            .await;
        (summary, String::from_utf8(out).unwrap())
    }
}

#[tokio::test]
async fn full_run_records_every_field_and_renders_plan() {
    let harness = Harness::new();
    let (summary, out) = harness.run(ScriptedInput::new(answers_through(8))).await;

    assert!(matches!(summary.outcome, Outcome::Completed));
    assert_eq!(summary.record.current_step, 9);
    for step in Step::ALL {
        assert!(summary.record.is_answered(step), "step {step} unanswered");
    }
    assert_eq!(summary.saved_to.as_deref(), Some(harness.persister().path()));

    assert!(out.contains("IMPLEMENTATION PLAN"));
    assert!(!out.contains("Not specified"));
    assert!(out.contains("Set up FastAPI project"));
    assert!(out.contains("🎉 Congratulations!"));
    // No continue question after the last step.
    assert_eq!(out.matches("Ready to continue to the next step?").count(), 7);

    let snapshot = harness.snapshot();
    assert_eq!(snapshot["current_step"], 9);
    assert_eq!(
        snapshot["backend_framework"],
        "FastAPI (Python) - High performance, automatic API docs"
    );
    assert_eq!(
        snapshot["communication_method"]["client"],
        "Axios (already used) - HTTP client library"
    );
    let on_disk: SessionRecord = serde_json::from_value(snapshot).unwrap();
    assert_eq!(on_disk, summary.record);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
#[case(7)]
#[tokio::test]
async fn declining_after_a_step_saves_and_stops(#[case] k: usize) {
    let harness = Harness::new();
    let mut lines = answers_through(k);
    // Replace the final "continue" with "No, let me review this step".
    *lines.last_mut().unwrap() = "2";
    let input = ScriptedInput::new(lines);
    let (summary, out) = harness.run(input).await;

    let after = Step::ALL[k - 1];
    assert!(matches!(summary.outcome, Outcome::Declined { after: s } if s == after));
    assert_eq!(usize::from(summary.record.current_step), k + 1);
    for step in &Step::ALL[..k] {
        assert!(summary.record.is_answered(*step));
    }
    for step in &Step::ALL[k..] {
        assert!(summary.record.is_unanswered(*step));
    }
    assert!(!out.contains("IMPLEMENTATION PLAN"));
    assert!(out.contains("Feel free to review"));

    let on_disk: SessionRecord = serde_json::from_value(harness.snapshot()).unwrap();
    assert_eq!(on_disk, summary.record);
}

#[tokio::test]
async fn custom_no_at_continue_declines() {
    let harness = Harness::new();
    let input = ScriptedInput::new(["1", "3", "No, I want to check with the team"]);
    let (summary, out) = harness.run(input).await;

    assert!(matches!(
        summary.outcome,
        Outcome::Declined {
            after: Step::FrontendAnalysis
        }
    ));
    assert!(out.contains("✅ Custom choice: No, I want to check with the team"));
    assert_eq!(harness.snapshot()["current_step"], 2);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(8)]
#[tokio::test]
async fn interrupt_during_a_step_saves_prior_steps(#[case] k: usize) {
    let harness = Harness::new();
    let input = ScriptedInput::new(answers_through(k - 1)).then_interrupt();
    let (summary, out) = harness.run(input).await;

    let during = Step::ALL[k - 1];
    assert!(matches!(summary.outcome, Outcome::Interrupted { during: s } if s == during));
    assert_eq!(usize::from(summary.record.current_step), k);
    assert!(summary.record.is_unanswered(during));
    assert!(out.contains("Assistant paused"));

    let snapshot = harness.snapshot();
    assert_eq!(snapshot["current_step"], k);
    let on_disk: SessionRecord = serde_json::from_value(snapshot).unwrap();
    assert_eq!(on_disk, summary.record);
}

#[tokio::test]
async fn interrupt_between_questions_keeps_framework_choice() {
    let harness = Harness::new();
    // Step 1, continue, then the framework question only.
    let input = ScriptedInput::new(["1", "1", "2"]).then_interrupt();
    let (summary, _) = harness.run(input).await;

    assert!(matches!(
        summary.outcome,
        Outcome::Interrupted {
            during: Step::BackendFramework
        }
    ));
    assert_eq!(
        harness.snapshot()["backend_framework"],
        "Flask (Python) - Lightweight, flexible, great for MVPs"
    );
    assert!(harness.snapshot()["backend_framework_experience"].is_null());
}

#[tokio::test]
async fn end_of_input_is_treated_like_a_pause() {
    let harness = Harness::new();
    let (summary, _) = harness.run(ScriptedInput::new(answers_through(3))).await;

    assert!(matches!(
        summary.outcome,
        Outcome::InputClosed {
            during: Step::DataStructure
        }
    ));
    assert_eq!(harness.snapshot()["current_step"], 4);
}

#[tokio::test]
async fn invalid_answers_do_not_advance_the_sequence() {
    let harness = Harness::new();
    let mut lines = vec!["0", "seven", "4", "", "I just joined"];
    lines.push("2");
    let (summary, out) = harness.run(ScriptedInput::new(lines)).await;

    assert!(matches!(summary.outcome, Outcome::Declined { .. }));
    assert_eq!(
        summary.record.frontend_tech_stack.unwrap().familiarity,
        "I just joined"
    );
    assert!(out.contains("❌ Invalid choice"));
    assert!(out.contains("❌ Please enter a valid number"));
}

#[tokio::test]
async fn resumed_run_starts_at_recorded_step() {
    let harness = Harness::new();
    let input = ScriptedInput::new(answers_through(2)).then_interrupt();
    let (first, _) = harness.run(input).await;
    assert_eq!(first.record.current_step, 3);

    let saved = harness.persister().load().unwrap().unwrap();
    let remaining: Vec<_> = answers_through(8)
        .into_iter()
        .skip(answers_through(2).len())
        .collect();
    let mut out = Vec::new();
    let summary = Sequencer::new(
        ScriptedInput::new(remaining),
        &mut out,
        harness.persister(),
        WizardOptions::default(),
    )
    .with_record(saved)
    .run()
    .await;

    assert!(matches!(summary.outcome, Outcome::Completed));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Resuming your saved session at step 3"));
    assert!(!text.contains("STEP 1:"));
    assert!(!text.contains("STEP 2:"));
    assert!(text.contains("STEP 3:"));
    assert!(!text.contains("Not specified"));
}

/// Fails any write containing `marker`.
struct FailingWriter {
    marker: &'static str,
    buf: Vec<u8>,
}

impl Write for FailingWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if String::from_utf8_lossy(data).contains(self.marker) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn output_fault_reports_step_and_still_saves() {
    let harness = Harness::new();
    let mut writer = FailingWriter {
        marker: Step::LlmIntegration.title(),
        buf: Vec::new(),
    };
    let summary = Sequencer::new(
        ScriptedInput::new(answers_through(2)),
        &mut writer,
        harness.persister(),
        WizardOptions::default(),
    )
    .run()
    .await;

    assert!(matches!(
        summary.outcome,
        Outcome::Failed {
            step: Step::LlmIntegration,
            ..
        }
    ));
    assert!(summary.saved_to.is_some());
    assert_eq!(harness.snapshot()["current_step"], 3);

    let text = String::from_utf8(writer.buf).unwrap();
    assert!(text.contains("❌ Error in step 3: stdout closed"));
    assert!(text.contains("Don't worry"));
}

#[tokio::test]
async fn unwritable_snapshot_is_only_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let summary = Sequencer::new(
        ScriptedInput::new(answers_through(8)),
        &mut out,
        // A directory cannot be overwritten with a file.
        SessionPersister::new(dir.path()),
        WizardOptions::default(),
    )
    .run()
    .await;

    assert!(matches!(summary.outcome, Outcome::Completed));
    assert!(summary.saved_to.is_none());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("⚠️ Could not save session"));
    assert!(text.contains("🎉 Congratulations!"));
}
