//! Plain-text cards placed into the chat history.

use super::challenge::DELIMITER;
use super::Category;
use crate::error::QuizError;

/// Title of the question card.
pub const CHALLENGE_TITLE: &str = "🎄 Christmas Challenge";
/// Title of the verdict card.
pub const VERDICT_TITLE: &str = "🎅 Santa's Verdict";
/// Title of the failure card.
pub const FAILURE_TITLE: &str = "❄️ The Workshop Is Snowed In";

/// Placeholder shown while a challenge is being generated.
#[must_use]
pub fn researching(category: Category) -> String {
    format!("✨ *Consulting the North Pole library for {category}...*")
}

/// Placeholder shown while an answer is being judged.
#[must_use]
pub fn judging() -> String {
    "Checking the Nice List... 📝".to_string()
}

/// Card wrapping the public question. Stray delimiters are stripped.
#[must_use]
pub fn question_card(question: &str) -> String {
    card(CHALLENGE_TITLE, question.replace(DELIMITER, "").trim())
}

/// Card wrapping Santa's verdict.
#[must_use]
pub fn verdict_card(verdict: &str) -> String {
    card(VERDICT_TITLE, verdict.trim())
}

/// Card telling the player a generation call failed and the turn can be retried.
#[must_use]
pub fn failure_card(error: &QuizError) -> String {
    card(
        FAILURE_TITLE,
        &format!(
            "The elves could not finish that one ({error}).\nSend the same input again to retry."
        ),
    )
}

fn card(title: &str, body: &str) -> String {
    format!("## {title}\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::TaskId;

    #[test]
    fn question_card_has_title_and_no_delimiter() {
        let rendered = question_card("  What is eggnog? |||\n");
        assert!(rendered.starts_with("## 🎄 Christmas Challenge"));
        assert!(rendered.ends_with("What is eggnog?"));
        assert!(!rendered.contains(DELIMITER));
    }

    #[test]
    fn verdict_card_wraps_text() {
        assert_eq!(verdict_card("Ho ho ho!\n"), "## 🎅 Santa's Verdict\n\nHo ho ho!");
    }

    #[test]
    fn failure_card_mentions_task_and_retry() {
        let err = QuizError::GenerationFailure {
            task: TaskId::new("judge"),
            reason: "timeout".into(),
        };
        let rendered = failure_card(&err);
        assert!(rendered.contains("task 'judge' failed: timeout"));
        assert!(rendered.contains("retry"));
    }

    #[test]
    fn placeholders_name_what_is_happening() {
        assert!(researching(Category::Music).contains("for Music"));
        assert!(judging().contains("Nice List"));
    }
}
