use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[test]
fn missing_url_is_a_client_error() {
    let app = make_app();

    for uri in ["/proxy", "/proxy?url=", "/proxy?other=1"] {
        let err = handle(get(uri), &app).err().expect("request should fail");
        assert!(matches!(err, ServerError::BadRequest(_)), "{uri}");

        let resp = html_error_response(err);
        assert_eq!(resp.status(), 400);
        assert!(body_string(resp).contains("Missing URL"));
    }
}

#[test]
fn upstream_failure_is_a_server_error() {
    let app = make_app();
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let uri = format!("/proxy?url=http%3A%2F%2F127.0.0.1%3A{port}%2Fa.jpg");
    let err = handle(get(&uri), &app).err().expect("request should fail");
    assert!(matches!(err, ServerError::Relay(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 500);
    assert!(body_string(resp).contains("Failed to fetch image"));
}

#[test]
fn relays_upstream_bytes_with_cache_header() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: image/webp\r\nContent-Length: 4\r\nConnection: close\r\n\r\nWEBP",
            );
        }
    });

    let app = make_app();
    let encoded: String =
        url::form_urlencoded::byte_serialize(format!("http://{addr}/pic.webp?size=150").as_bytes())
            .collect();

    let resp = handle(get(&format!("/proxy?url={encoded}")), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "image/webp");
    assert_eq!(resp.headers()["Cache-Control"], "public, max-age=86400");
    assert_eq!(resp.headers()["X-Content-Type-Options"], "nosniff");
    assert_eq!(resp.headers()["Content-Security-Policy"], "sandbox");
    assert_eq!(body_string(resp), "WEBP");
}

#[test]
fn relayed_html_is_sandboxed() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 18\r\nConnection: close\r\n\r\n<script>1</script>",
            );
        }
    });

    let app = make_app();
    let encoded: String =
        url::form_urlencoded::byte_serialize(format!("http://{addr}/x").as_bytes()).collect();

    let resp = handle(get(&format!("/proxy?url={encoded}")), &app).unwrap();

    assert_eq!(resp.headers()["Content-Type"], "text/html");
    assert_eq!(resp.headers()["X-Content-Type-Options"], "nosniff");
    assert_eq!(resp.headers()["Content-Security-Policy"], "sandbox");
}
