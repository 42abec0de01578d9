//! Line sources the prompt collector reads operator answers from.

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use {
    async_trait::async_trait,
    tokio::sync::mpsc,
    tracing::{debug, warn},
};

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without its trailing newline.
    Line(String),
    /// End of input; no more lines will arrive.
    Closed,
    /// The operator asked to cancel (Ctrl-C).
    Interrupted,
}

#[async_trait]
pub trait LineSource: Send {
    /// Block until the next line, end of input, or cancellation.
    async fn next_line(&mut self) -> Input;
}

/// Reads stdin on a dedicated thread and races each read against Ctrl-C.
///
/// Tokio's own stdin handle keeps the runtime alive until a line arrives,
/// so blocking reads live on a plain OS thread that forwards lines over a
/// channel. The interrupt listener is registered once and lives as long as
/// the input, so a Ctrl-C pressed between reads is reported by the next one.
pub struct TerminalInput {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
    interrupts: Interrupts,
}

impl TerminalInput {
    /// Must be called from within a Tokio runtime.
    pub fn spawn() -> io::Result<Self> {
        let interrupts = Interrupts::listen()?;
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                debug!("stdin reader finished");
            })?;
        Ok(Self::from_parts(rx, interrupts))
    }

    fn from_parts(
        lines: mpsc::UnboundedReceiver<io::Result<String>>,
        interrupts: Interrupts,
    ) -> Self {
        Self { lines, interrupts }
    }
}

#[async_trait]
impl LineSource for TerminalInput {
    async fn next_line(&mut self) -> Input {
        tokio::select! {
            biased;
            signal = self.interrupts.recv() => match signal {
                Some(()) => Input::Interrupted,
                None => {
                    warn!("ctrl-c listener closed");
                    Input::Closed
                },
            },
            line = self.lines.recv() => match line {
                Some(Ok(line)) => Input::Line(line),
                Some(Err(e)) => {
                    warn!(error = %e, "failed to read stdin");
                    Input::Closed
                },
                None => Input::Closed,
            },
        }
    }
}

/// Long-lived Ctrl-C listener. Signals received while nobody is waiting are
/// held until the next `recv`.
#[cfg(unix)]
struct Interrupts(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Interrupts {
    fn listen() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::interrupt()).map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

#[cfg(windows)]
struct Interrupts(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl Interrupts {
    fn listen() -> io::Result<Self> {
        tokio::signal::windows::ctrl_c().map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

/// Replays a fixed sequence of inputs, then reports [`Input::Closed`].
///
/// Used to drive the wizard non-interactively.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
        }
    }

    /// Append an operator cancellation after the scripted lines.
    #[must_use]
    pub fn then_interrupt(mut self) -> Self {
        self.queue.push_back(Input::Interrupted);
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl LineSource for ScriptedInput {
    async fn next_line(&mut self) -> Input {
        self.queue.pop_front().unwrap_or(Input::Closed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_input_replays_then_closes() {
        let mut input = ScriptedInput::new(["1", "two"]).then_interrupt();
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.next_line().await, Input::Line("1".into()));
        assert_eq!(input.next_line().await, Input::Line("two".into()));
        assert_eq!(input.next_line().await, Input::Interrupted);
        assert_eq!(input.next_line().await, Input::Closed);
        assert_eq!(input.next_line().await, Input::Closed);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn ctrl_c_between_reads_interrupts_next_read() {
        use std::time::Duration;

        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = TerminalInput::from_parts(rx, Interrupts::listen().unwrap());

        tx.send(Ok("1".to_string())).unwrap();
        assert_eq!(input.next_line().await, Input::Line("1".into()));

        // Nobody is reading while the signal arrives.
        let status = std::process::Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());
        tokio::time::sleep(Duration::from_millis(50)).await;

        let next = tokio::time::timeout(Duration::from_secs(5), input.next_line())
            .await
            .expect("interrupt was not delivered");
        assert_eq!(next, Input::Interrupted);
        drop(tx);
    }
}
