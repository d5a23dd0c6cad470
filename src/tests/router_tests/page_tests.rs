use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app};

#[test]
fn home_page_loads_with_upload_control() {
    let app = make_app();

    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Instagram Comment Lottery"));
    assert!(body.contains(r#"id="csv-upload""#));
    assert!(body.contains(r#"id="lottery-root""#));
    // Nothing uploaded yet, so no lottery card.
    assert!(!body.contains("Start Lottery!"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = make_app();

    let err = handle(get("/nope"), &app).err().expect("request should fail");
    assert!(matches!(err, ServerError::NotFound));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn placeholder_avatar_is_svg() {
    let app = make_app();

    let resp = handle(get("/placeholder.svg"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "image/svg+xml");
    assert!(body_string(resp).starts_with("<svg"));
}
