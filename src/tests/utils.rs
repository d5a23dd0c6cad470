use crate::app::App;
use crate::lottery::{LotteryConfig, Phase};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::thread;
use std::time::{Duration, Instant};

/// App with ticks fast enough for a full countdown to finish in a test.
pub fn make_app() -> App {
    let lottery = LotteryConfig {
        fast_tick: Duration::from_millis(2),
        slow_tick: Duration::from_millis(10),
        ..LotteryConfig::default()
    };
    App::with_parts(lottery, Duration::from_secs(5)).expect("relay client should build")
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "text/csv; charset=utf-8")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn wait_for_phase(app: &App, phase: Phase) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if app.lottery.snapshot().phase == phase {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}
