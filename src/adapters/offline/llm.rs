//! Offline adapter for the `LlmClient` port.
//!
//! Answers from a small canned table so the game can be played (and tested
//! end to end) without network access. The reply is picked from the prompt
//! alone: judging prompts carry the stored key, formatting prompts ask for the
//! `|||` separator, anything else is treated as a research request.

use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};
use crate::quiz::challenge::DELIMITER;
use crate::quiz::Category;

/// Canned fact and question for one category.
struct CannedChallenge {
    category: Category,
    fact: &'static str,
    question: &'static str,
    key: &'static str,
}

const CANNED: &[CannedChallenge] = &[
    CannedChallenge {
        category: Category::Traditions,
        fact: "In Norway, people hide their brooms on Christmas Eve to keep witches from stealing them.",
        question: "[Question]: What do Norwegians traditionally hide on Christmas Eve?\n\nA) Their shoes\nB) Their brooms\nC) Their candles\nD) Their cookies",
        key: "B: Brooms are hidden so witches cannot ride them",
    },
    CannedChallenge {
        category: Category::Food,
        fact: "Eggnog descends from posset, a medieval British drink of hot milk, eggs and ale.",
        question: "[Question]: Which medieval drink is eggnog descended from?\n\nA) Mead\nB) Posset\nC) Wassail\nD) Cider",
        key: "B: Eggnog descends from posset",
    },
    CannedChallenge {
        category: Category::Clothing,
        fact: "Christmas jumpers became a UK charity tradition with Christmas Jumper Day, first held in 2012.",
        question: "[Question]: In which year was the first Christmas Jumper Day held?\n\nA) 1999\nB) 2005\nC) 2012\nD) 2018",
        key: "C: Christmas Jumper Day began in 2012",
    },
    CannedChallenge {
        category: Category::Myths,
        fact: "In Icelandic folklore the Yule Cat eats people who did not receive new clothes before Christmas.",
        question: "[Question]: Whom does the Icelandic Yule Cat threaten?\n\nA) People without new clothes\nB) Children who skip dinner\nC) Sailors at sea\nD) Anyone who sings off key",
        key: "A: The Yule Cat eats those without new clothes",
    },
    CannedChallenge {
        category: Category::Music,
        fact: "'Jingle Bells' was written for Thanksgiving and was the first song broadcast from space in 1965.",
        question: "[Question]: Which holiday was 'Jingle Bells' originally written for?\n\nA) Christmas\nB) New Year\nC) Easter\nD) Thanksgiving",
        key: "D: Jingle Bells was written for Thanksgiving",
    },
];

/// Deterministic LLM stand-in with canned holiday content.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLlmClient;

impl OfflineLlmClient {
    /// Creates the offline client.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn reply(prompt: &str) -> String {
        if let Some((answer, key)) = judging_pair(prompt) {
            return verdict(answer, key);
        }
        if prompt.contains(DELIMITER) {
            let canned = CANNED
                .iter()
                .find(|c| prompt.contains(c.fact))
                .unwrap_or(&CANNED[0]);
            return format!("{}\n\n{DELIMITER} {}", canned.question, canned.key);
        }
        let canned = CANNED
            .iter()
            .find(|c| prompt.contains(c.category.as_str()))
            .unwrap_or(&CANNED[0]);
        canned.fact.to_string()
    }
}

impl LlmClient for OfflineLlmClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let text = Self::reply(&request.prompt);
        let prompt_tokens = word_count(&request.prompt);
        let completion_tokens = word_count(&text);
        Box::pin(async move {
            Ok(CompletionResponse {
                text,
                prompt_tokens,
                completion_tokens,
            })
        })
    }
}

/// Extracts `(answer, key)` from "User answered '<answer>'. Truth is '<key>'."
fn judging_pair(prompt: &str) -> Option<(&str, &str)> {
    let rest = prompt.split_once("User answered '")?.1;
    let (answer, rest) = rest.split_once("'. Truth is '")?;
    let key = rest.rsplit_once("'.")?.0;
    Some((answer, key))
}

fn verdict(answer: &str, key: &str) -> String {
    let picked = answer.trim().chars().next().map(|c| c.to_ascii_uppercase());
    let correct = key.trim().chars().next().map(|c| c.to_ascii_uppercase());
    match (picked, correct) {
        (Some(p), Some(c)) if p == c => {
            format!("Ho ho ho! {p} is right, and you're on the Nice List this year! ({key})")
        }
        _ => format!("Oh ho, not quite! The answer was {key}. Have a cookie and try again."),
    }
}

fn word_count(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}
