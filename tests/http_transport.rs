use humaniser_client::protocol::HumaniseRequest;
use humaniser_client::{
    ClientConfig, HttpTransport, Phase, SubmissionController, Transport, TransportError,
};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Serves exactly one response on a random local port and hands back the raw
/// request it saw.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve_after(Duration::ZERO, status_line, body)
}

/// Like `serve_once`, but waits `delay` after reading the request.
fn serve_after(
    delay: Duration,
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        thread::sleep(delay);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut head = String::new();
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        if line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
        head.push_str(&line);
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    head + "\r\n" + &String::from_utf8(body).unwrap()
}

fn transport(base_url: &str) -> HttpTransport {
    let config = ClientConfig::new().with_base_url(base_url).unwrap();
    HttpTransport::new(config).unwrap()
}

#[test]
fn posts_json_text_to_the_humanise_path() {
    let (url, server) = serve_once("200 OK", r#"{"original":"hello","humanised":"Hi there!"}"#);
    let mut controller = SubmissionController::new(transport(&url));

    let state = controller.submit("hello");
    let request = server.join().unwrap();

    assert!(request.starts_with("POST /api/humanise HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"text":"hello"}"#));

    assert_eq!(state.output_text, "Hi there!");
    assert_eq!(state.error_message, "");
    assert_eq!(state.phase, Phase::Success);
}

#[test]
fn server_error_body_is_surfaced() {
    let (url, server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":"server overloaded"}"#,
    );
    let mut controller = SubmissionController::new(transport(&url));

    let state = controller.submit("hello");
    server.join().unwrap();

    assert_eq!(state.error_message, "server overloaded");
    assert_eq!(state.output_text, "");
    assert!(!state.is_busy);
}

#[test]
fn status_without_error_body_uses_status_message() {
    let (url, server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>");

    let err = transport(&url)
        .humanise(&HumaniseRequest::new("hello"))
        .unwrap_err();
    server.join().unwrap();

    assert_eq!(
        err,
        TransportError::Status {
            status: 502,
            server_message: None
        }
    );
    assert_eq!(err.user_message(), "Request failed with status code 502");
}

#[test]
fn output_field_and_non_json_success() {
    let (url, server) = serve_once("200 OK", r#"{"output":"Y"}"#);
    let reply = transport(&url)
        .humanise(&HumaniseRequest::new("x"))
        .unwrap();
    server.join().unwrap();
    assert_eq!(reply.into_text(), "Y");

    let (url, server) = serve_once("200 OK", "plain text");
    let reply = transport(&url)
        .humanise(&HumaniseRequest::new("x"))
        .unwrap();
    server.join().unwrap();
    assert_eq!(reply.into_text(), "");
}

#[test]
fn health_endpoint_is_read() {
    let (url, server) = serve_once("200 OK", r#"{"status":"ok"}"#);

    let health = transport(&url).health().unwrap();
    let request = server.join().unwrap();

    assert!(request.starts_with("GET /api/health HTTP/1.1"));
    assert!(health.is_ok());
}

#[test]
fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(1500));
        drop(stream);
    });

    let config = ClientConfig::new()
        .with_base_url(&url)
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let mut controller = SubmissionController::new(HttpTransport::new(config).unwrap());

    let state = controller.submit("hello");
    server.join().unwrap();

    assert_eq!(state.error_message, "timeout of 200ms exceeded");
    assert!(!state.is_busy);
}

#[test]
fn unreachable_server_reports_transport_message() {
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let mut controller = SubmissionController::new(transport(&url));

    let state = controller.submit("hello");

    assert_eq!(state.phase, Phase::Failed(humaniser_client::FailureKind::Request));
    assert!(!state.error_message.is_empty());
    assert_ne!(state.error_message, "Request failed");
}

#[test]
fn zero_timeout_waits_for_a_slow_server() {
    let (url, server) = serve_after(
        Duration::from_millis(300),
        "200 OK",
        r#"{"humanised":"Took a while."}"#,
    );
    let config = ClientConfig::new()
        .with_base_url(&url)
        .unwrap()
        .with_timeout(Duration::ZERO);
    let mut controller = SubmissionController::new(HttpTransport::new(config).unwrap());

    let state = controller.submit("hello");
    server.join().unwrap();

    assert_eq!(state.output_text, "Took a while.");
    assert_eq!(state.phase, Phase::Success);
}
