//! Record-replay round-trip integration tests.
//!
//! 1. Build a cassette by hand with `CassetteRecorder` and replay a full
//!    Idle -> WaitingForAnswer -> Idle cycle from it.
//! 2. Record a live-like session (offline adapter behind the recorder) and
//!    assert that replaying the written cassette reproduces every snapshot.

use serde_json::json;

use workshop::cassette::format::Cassette;
use workshop::cassette::recorder::CassetteRecorder;
use workshop::cassette::session::LLM_CASSETTE_FILE;
use workshop::config::Settings;
use workshop::context::ServiceContext;
use workshop::quiz::{Category, Session, SessionStatus, TurnInput, UiSnapshot};

/// Plays one challenge and one answer, returning every emitted snapshot.
async fn play_one_round(ctx: &ServiceContext, answer: &str) -> Vec<UiSnapshot> {
    let crew = ctx.crew();
    let (mut snapshots, session) = Session::new()
        .advance(&crew, TurnInput::Start, Some(Category::Food))
        .collect()
        .await;
    let (answered, _) = session
        .advance(&crew, TurnInput::Text(answer.into()), None)
        .collect()
        .await;
    snapshots.extend(answered);
    snapshots
}

fn completion(text: &str) -> serde_json::Value {
    json!({"Ok": {"text": text, "prompt_tokens": 12, "completion_tokens": 8}})
}

#[tokio::test]
async fn handwritten_cassette_drives_a_full_cycle() {
    let dir = std::env::temp_dir().join("workshop_record_replay_manual");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "roundtrip-test", "claude-test");
    recorder.record(
        "llm",
        "complete",
        json!({"prompt": "Find one specific Christmas fact about Food."}),
        completion("Mince pies once contained real meat."),
    );
    recorder.record(
        "llm",
        "complete",
        json!({"prompt": "Create MCQ."}),
        completion("[Question]: What did mince pies contain?\nA) Meat\nB) Fish ||| A: real meat"),
    );
    recorder.record(
        "llm",
        "complete",
        json!({"prompt": "judge"}),
        completion("Ho ho ho! Nice List!"),
    );
    let written_path = recorder.finish().expect("recording should succeed");
    assert_eq!(written_path, cassette_path);

    let ctx = ServiceContext::replaying(&cassette_path, Settings::default()).unwrap();
    let snapshots = play_one_round(&ctx, "a").await;

    assert_eq!(snapshots.len(), 4);
    let challenge = &snapshots[1];
    assert_eq!(challenge.state.status(), SessionStatus::WaitingForAnswer);
    assert!(challenge.latest().unwrap().content.contains("What did mince pies contain?"));
    assert!(!challenge.latest().unwrap().content.contains("real meat"));

    let verdict = &snapshots[3];
    assert_eq!(verdict.state.status(), SessionStatus::Idle);
    assert!(verdict.show_next);
    assert!(verdict.latest().unwrap().content.contains("Nice List!"));

    let replay = ServiceContext::replaying(&cassette_path, Settings::default()).unwrap();
    let again = play_one_round(&replay, "a").await;
    assert_eq!(snapshots, again, "determinism: snapshots differ between replays");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn recorded_session_replays_identically() {
    let base = std::env::temp_dir().join("workshop_record_replay_session");
    let _ = std::fs::remove_dir_all(&base);

    let (ctx, session) =
        ServiceContext::recording_at(ServiceContext::offline(Settings::default()), &base).unwrap();
    let recorded = play_one_round(&ctx, "B").await;
    drop(ctx);
    let dir = session.finish().unwrap();
    let cassette_path = dir.join(LLM_CASSETTE_FILE);

    let cassette = Cassette::load(&cassette_path).unwrap();
    assert_eq!(cassette.interactions.len(), 3);
    assert!(cassette.interactions.iter().all(|i| i.port == "llm" && i.method == "complete"));
    let judge_prompt = cassette.interactions[2].input["prompt"].as_str().unwrap();
    assert!(judge_prompt.contains("User answered 'B'"));

    let replay = ServiceContext::replaying(&cassette_path, Settings::default()).unwrap();
    let replayed = play_one_round(&replay, "B").await;
    assert_eq!(recorded, replayed);
    assert!(replayed.last().unwrap().latest().unwrap().content.contains("Ho ho ho!"));

    let _ = std::fs::remove_dir_all(&base);
}

#[tokio::test]
async fn short_cassette_surfaces_failure_instead_of_panicking() {
    let dir = std::env::temp_dir().join("workshop_record_replay_short");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("short.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "short", "claude-test");
    recorder.record("llm", "complete", json!({}), completion("only a fact"));
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path, Settings::default()).unwrap();
    let crew = ctx.crew();
    let (snapshots, session) = Session::new()
        .advance(&crew, TurnInput::Start, None)
        .collect()
        .await;

    assert_eq!(session.state().status(), SessionStatus::Idle);
    let card = &snapshots.last().unwrap().latest().unwrap().content;
    assert!(card.contains("task 'format' failed"));
    assert!(card.contains("cassette exhausted"));

    let _ = std::fs::remove_dir_all(&dir);
}
