use crate::lottery::Phase;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app, post, wait_for_phase};
use std::thread;
use std::time::Duration;

const TWO_COMMENTS: &str = "comment_id;username;text\n1;alice;hi\n2;bob;yo\n";

fn post_empty(uri: &str) -> astra::Request {
    post(uri, "")
}

#[test]
fn start_without_records_stays_idle() {
    let app = make_app();

    for _ in 0..2 {
        let resp = handle(post_empty("/lottery/start"), &app).unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).contains(r#"data-phase="idle""#));
    }

    assert_eq!(app.lottery.snapshot().phase, Phase::Idle);
    assert!(!app.lottery.is_ticking());
}

#[test]
fn full_run_reveals_alice_or_bob() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();

    let body = body_string(handle(post_empty("/lottery/start"), &app).unwrap());
    assert!(body.contains(r#"data-phase="countdown""#));
    assert!(body.contains(r#"hx-get="/lottery/panel""#));

    assert!(wait_for_phase(&app, Phase::Revealed), "countdown never finished");

    let state: serde_json::Value =
        serde_json::from_str(&body_string(handle(get("/lottery/state"), &app).unwrap())).unwrap();
    assert_eq!(state["phase"], "revealed");
    assert!(state["preview"].is_null());

    let winner = &state["winner"];
    let pair = (
        winner["comment_id"].as_str().unwrap(),
        winner["username"].as_str().unwrap(),
        winner["text"].as_str().unwrap(),
    );
    assert!(pair == ("1", "alice", "hi") || pair == ("2", "bob", "yo"), "{pair:?}");

    let panel = body_string(handle(get("/lottery/panel"), &app).unwrap());
    assert!(panel.contains("WINNER!"));
    assert!(panel.contains("Run Another Lottery"));
}

#[test]
fn reset_returns_to_start_button() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();
    handle(post_empty("/lottery/start"), &app).unwrap();
    assert!(wait_for_phase(&app, Phase::Revealed));

    let body = body_string(handle(post_empty("/lottery/reset"), &app).unwrap());

    assert!(body.contains("Start Lottery!"));
    let snapshot = app.lottery.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.winner.is_none());
    assert!(snapshot.preview.is_none());
    assert_eq!(snapshot.ticks_remaining, 5);
}

#[test]
fn upload_during_countdown_cancels_it() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();
    handle(post_empty("/lottery/start"), &app).unwrap();
    thread::sleep(Duration::from_millis(15));

    handle(post("/upload", "username\ncarol\ndave\n"), &app).unwrap();
    let after_upload = app.lottery.snapshot();
    assert_eq!(after_upload.phase, Phase::Idle);
    assert!(after_upload.preview.is_none());

    thread::sleep(Duration::from_millis(120));
    assert_eq!(app.lottery.snapshot(), after_upload);
    assert!(!app.lottery.is_ticking());
}
