//! Answer-key codec for generated challenges.
//!
//! The formatting capability returns free text of the shape
//! `<question block> ||| <answer letter>: <fact>`. Only the part before the
//! first delimiter may be shown to the player.

/// Separator between the public question and the hidden answer key.
pub const DELIMITER: &str = "|||";

/// Key stored when the generated text carries no delimiter.
pub const HIDDEN_KEY: &str = "Hidden";

/// A decoded challenge.
#[derive(Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    /// Text shown to the player.
    pub public_question: String,
    /// Answer key used for judging; never shown to the player.
    pub secret_key: String,
}

impl std::fmt::Debug for ChallengeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeRecord")
            .field("public_question", &self.public_question)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Splits raw generated text into question and answer key.
///
/// Never fails. Without a delimiter the whole trimmed text becomes the
/// question and the key falls back to [`HIDDEN_KEY`]; otherwise everything
/// after the first delimiter (including any later delimiters) is the key.
#[must_use]
pub fn decode(raw: &str) -> ChallengeRecord {
    match raw.split_once(DELIMITER) {
        Some((question, key)) => ChallengeRecord {
            public_question: question.trim().to_string(),
            secret_key: key.trim().to_string(),
        },
        None => ChallengeRecord {
            public_question: raw.trim().to_string(),
            secret_key: HIDDEN_KEY.to_string(),
        },
    }
}
