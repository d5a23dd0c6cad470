use crate::errors::ServerError;
use crate::lottery::Phase;
use crate::router::{handle, MAX_UPLOAD_BYTES};
use crate::tests::utils::{body_string, get, make_app, post};
use astra::Body;
use http::Method;

const TWO_COMMENTS: &str = "comment_id;username;text\n1;alice;hi\n2;bob;yo\n";

#[test]
fn upload_returns_lottery_partial() {
    let app = make_app();

    let resp = handle(post("/upload", TWO_COMMENTS), &app).expect("upload should succeed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Loaded 2 comments"));
    assert!(body.contains("Start Lottery!"));

    // Partial for swapping into the page, not a full document.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn uploaded_records_show_up_in_state() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();

    let resp = handle(get("/lottery/state"), &app).unwrap();
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let state: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(state["phase"], "idle");
    assert_eq!(state["record_count"], 2);
    assert_eq!(state["ticks_remaining"], 5);
    assert!(state["winner"].is_null());
}

#[test]
fn new_upload_replaces_previous_records() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();

    let body = body_string(
        handle(post("/upload", "username\ncarol\ndave\nerin\n"), &app).unwrap(),
    );

    assert!(body.contains("Loaded 3 comments"));
    assert_eq!(app.lottery.snapshot().record_count, 3);
}

#[test]
fn header_only_upload_hides_the_lottery() {
    let app = make_app();

    let body = body_string(handle(post("/upload", "comment_id;username\n"), &app).unwrap());

    assert!(!body.contains("Loaded"));
    assert!(!body.contains("Start Lottery!"));
    assert_eq!(app.lottery.snapshot().phase, Phase::Idle);
}

#[test]
fn empty_body_is_rejected_and_keeps_records() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();

    let err = handle(post("/upload", ""), &app).err().expect("request should fail");

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
    assert_eq!(app.lottery.snapshot().record_count, 2);
}

#[test]
fn oversized_upload_is_rejected_and_keeps_records() {
    let app = make_app();
    handle(post("/upload", TWO_COMMENTS), &app).unwrap();

    let mut csv = String::from("comment_id;username;text\n");
    let mut i = 0;
    while csv.len() as u64 <= MAX_UPLOAD_BYTES {
        csv.push_str(&format!("{i};user{i};hello\n"));
        i += 1;
    }

    let err = handle(post("/upload", &csv), &app).err().expect("request should fail");

    assert!(matches!(err, ServerError::BadRequest(ref msg) if msg == "CSV too large"));
    assert_eq!(err.status(), 400);
    assert_eq!(app.lottery.snapshot().record_count, 2);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let app = make_app();
    let mut raw = b"username;text\nal\xffice;hi\n".to_vec();
    raw.extend_from_slice(b"bob;yo\n");

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(Body::from(raw))
        .unwrap();

    let body = body_string(handle(req, &app).unwrap());
    assert!(body.contains("Loaded 2 comments"));
}
