// tests/fetch.rs
//
// Fetcher against a one-shot local HTTP responder (plain TCP, no TLS).
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use calypso_slots::config::options::FetchOptions;
use calypso_slots::core::net::fetch_planning_page;
use calypso_slots::{Error, NetworkError, runner};

/// Serve exactly one response, return the URL to hit.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            req.extend_from_slice(&buf[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line, body.len(), body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&req).into_owned()
    });

    (format!("http://{addr}/register.asp?action2=Planning"), handle)
}

#[test]
fn returns_body_on_success() {
    let (url, server) = serve_once("200 OK", "<html>planning</html>");
    let body = fetch_planning_page(&FetchOptions::with_url(url)).unwrap();
    assert_eq!(body, "<html>planning</html>");

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /register.asp?action2=Planning "));
    assert!(request.to_ascii_lowercase().contains("user-agent: calypso_slots/"));
}

#[test]
fn non_success_status_is_network_error() {
    let (url, server) = serve_once("503 Service Unavailable", "");
    let err = fetch_planning_page(&FetchOptions::with_url(url)).unwrap_err();
    match err {
        NetworkError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected Status, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn refused_connection_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = fetch_planning_page(&FetchOptions::with_url(format!("http://127.0.0.1:{port}/"))).unwrap_err();
    assert!(matches!(err, NetworkError::Request { .. }));
}

#[test]
fn pipeline_surfaces_parse_errors() {
    let (url, server) = serve_once("200 OK", "<html><body>maintenance</body></html>");
    let err = runner::run(&FetchOptions::with_url(url)).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    server.join().unwrap();
}
