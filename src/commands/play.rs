//! `workshop play`: the interactive terminal driver.
//!
//! Reads one line per turn and prints each snapshot as the session machine
//! emits it. An empty line presses whichever button is visible (start or
//! next challenge); any other line is sent as the answer.

use std::io::{BufRead, Write};

use crate::context::ServiceContext;
use crate::error::Result;
use crate::quiz::{Category, ChatRole, Crew, Session, SessionStatus, TurnInput, UiSnapshot};

/// Play the quiz until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if terminal I/O fails. Generation failures are shown to
/// the player and never end the game.
pub async fn run<R: BufRead, W: Write>(
    ctx: &ServiceContext,
    category: Category,
    reader: R,
    writer: W,
) -> Result<()> {
    let crew = ctx.crew();
    PlayLoop::new(category, reader, writer).run(&crew).await?;
    Ok(())
}

/// A line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Leave the game.
    Quit,
    /// Switch to another category for the next challenge.
    SwitchCategory(String),
    /// Input for the session machine (may be empty).
    Input(String),
}

/// Classifies one raw input line.
#[must_use]
pub fn parse_player_input(line: &str) -> PlayerAction {
    let trimmed = line.trim();
    match trimmed {
        ":quit" | ":q" | ":exit" => PlayerAction::Quit,
        _ => match trimmed.strip_prefix(":category") {
            Some(rest) => PlayerAction::SwitchCategory(rest.trim().to_string()),
            None => PlayerAction::Input(trimmed.to_string()),
        },
    }
}

/// Maps a line onto the visible controls: an empty line presses the visible button.
fn turn_input(snapshot: &UiSnapshot, text: String) -> TurnInput {
    if text.is_empty() && snapshot.show_start {
        TurnInput::Start
    } else if text.is_empty() && snapshot.show_next {
        TurnInput::Next
    } else {
        TurnInput::Text(text)
    }
}

/// State for the interactive game loop.
pub struct PlayLoop<R: BufRead, W: Write> {
    category: Category,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PlayLoop<R, W> {
    /// Creates a game loop starting in `category`.
    #[must_use]
    pub fn new(category: Category, reader: R, writer: W) -> Self {
        Self {
            category,
            reader,
            writer,
        }
    }

    /// Runs turns until the player quits or the reader is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub async fn run(mut self, crew: &Crew) -> Result<Session> {
        let mut session = Session::new();
        writeln!(self.writer, "❄️ The Christmas Workshop ❄️")?;
        writeln!(self.writer, "Commands: :category <name>, :quit")?;
        self.show_controls(&session.snapshot())?;

        while let Some(line) = self.read_line()? {
            match parse_player_input(&line) {
                PlayerAction::Quit => break,
                PlayerAction::SwitchCategory(name) => {
                    match name.parse::<Category>() {
                        Ok(category) => {
                            self.category = category;
                            writeln!(self.writer, "Category set to {category}.")?;
                        }
                        Err(msg) => writeln!(self.writer, "{msg}")?,
                    }
                    self.show_controls(&session.snapshot())?;
                }
                PlayerAction::Input(text) => {
                    let input = turn_input(&session.snapshot(), text);
                    let mut turn = session.advance(crew, input, Some(self.category));
                    while let Some(snapshot) = turn.next().await {
                        self.show_latest(&snapshot)?;
                    }
                    session = turn.into_session();
                    self.show_controls(&session.snapshot())?;
                }
            }
        }

        writeln!(self.writer, "\nMerry Christmas! 🎁")?;
        Ok(session)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show_latest(&mut self, snapshot: &UiSnapshot) -> Result<()> {
        if let Some(message) = snapshot.latest().filter(|m| m.role == ChatRole::Assistant) {
            writeln!(self.writer, "\n{}", message.content)?;
        }
        Ok(())
    }

    fn show_controls(&mut self, snapshot: &UiSnapshot) -> Result<()> {
        if snapshot.show_start {
            writeln!(self.writer, "\n[Enter] 🚀 Start Workshop ({})", self.category)?;
        } else if snapshot.show_next {
            writeln!(self.writer, "\n[Enter] 🎁 Next Challenge ({})", self.category)?;
        } else if snapshot.state.status() == SessionStatus::WaitingForAnswer {
            writeln!(self.writer, "\nYour answer (A, B, C or D):")?;
        }
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::test_support::{capturing_llm, replaying_llm};

    #[test]
    fn parse_quit_variants() {
        for line in [":quit\n", ":q", "  :exit  "] {
            assert_eq!(parse_player_input(line), PlayerAction::Quit);
        }
    }

    #[test]
    fn parse_category_switch() {
        assert_eq!(
            parse_player_input(":category Music\n"),
            PlayerAction::SwitchCategory("Music".into())
        );
    }

    #[test]
    fn parse_answer_and_blank_line() {
        assert_eq!(parse_player_input(" b \n"), PlayerAction::Input("b".into()));
        assert_eq!(parse_player_input("\n"), PlayerAction::Input(String::new()));
    }

    #[test]
    fn blank_line_presses_visible_button() {
        let fresh = Session::new().snapshot();
        assert_eq!(turn_input(&fresh, String::new()), TurnInput::Start);

        let after_verdict = UiSnapshot {
            show_start: false,
            show_next: true,
            ..fresh.clone()
        };
        assert_eq!(turn_input(&after_verdict, String::new()), TurnInput::Next);

        let answering = UiSnapshot {
            show_start: false,
            show_next: false,
            ..fresh
        };
        assert_eq!(turn_input(&answering, String::new()), TurnInput::Text(String::new()));
        assert_eq!(turn_input(&answering, "A".into()), TurnInput::Text("A".into()));
    }

    #[tokio::test]
    async fn full_round_prints_question_then_verdict() {
        let crew = Crew::new(
            &replaying_llm(&[
                Ok("Brooms are hidden in Norway."),
                Ok("[Question]: What is hidden?\nA) Shoes\nB) Brooms ||| B: brooms"),
                Ok("Ho ho ho! Correct!"),
            ]),
            &Settings::default(),
        );
        let reader = std::io::Cursor::new(b"\nB\n:quit\n" as &[u8]);
        let mut output = Vec::new();

        let session = PlayLoop::new(Category::Traditions, reader, &mut output)
            .run(&crew)
            .await
            .unwrap();
        assert_eq!(session.state().status(), SessionStatus::Idle);

        let text = String::from_utf8(output).unwrap();
        let placeholder_at = text.find("Consulting the North Pole library for Traditions").unwrap();
        let question_at = text.find("What is hidden?").unwrap();
        let verdict_at = text.find("Ho ho ho! Correct!").unwrap();
        assert!(placeholder_at < question_at && question_at < verdict_at);
        assert!(text.contains("Your answer (A, B, C or D):"));
        assert!(text.contains("🎁 Next Challenge"));
        assert!(!text.contains("|||"));
        assert!(!text.contains("B: brooms"));
    }

    #[tokio::test]
    async fn category_switch_applies_to_next_challenge() {
        let (llm, recorder) = capturing_llm(&[Ok("fact"), Ok("Q ||| A: x")]);
        let crew = Crew::new(&llm, &Settings::default());
        let reader = std::io::Cursor::new(b":category myths\n\n" as &[u8]);
        let mut output = Vec::new();

        PlayLoop::new(Category::Food, reader, &mut output)
            .run(&crew)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Category set to Myths."));
        let guard = recorder.lock().unwrap();
        let prompt = guard.interactions()[0].input["prompt"].as_str().unwrap();
        assert!(prompt.contains("about Myths"));
    }

    #[tokio::test]
    async fn unknown_category_is_reported_and_ignored() {
        let crew = Crew::new(&replaying_llm(&[]), &Settings::default());
        let reader = std::io::Cursor::new(b":category Elves\n" as &[u8]);
        let mut output = Vec::new();

        PlayLoop::new(Category::Food, reader, &mut output)
            .run(&crew)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("unknown category 'Elves'"));
        assert!(text.contains("Start Workshop (Food)"));
    }

    #[tokio::test]
    async fn generation_failure_is_shown_and_game_continues() {
        let crew = Crew::new(&replaying_llm(&[Err("connection refused")]), &Settings::default());
        let reader = std::io::Cursor::new(b"\n" as &[u8]);
        let mut output = Vec::new();

        let session = PlayLoop::new(Category::Food, reader, &mut output)
            .run(&crew)
            .await
            .unwrap();
        assert_eq!(session.state().status(), SessionStatus::Idle);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Snowed In"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("Merry Christmas!"));
    }
}
