use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

fn client(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_client"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// Accepts one connection, reads the request and answers with `response`.
fn start_mock_server(response: &'static str) -> (u16, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buffer = [0; 1024];
        while !request.ends_with(b"\n\n") {
            let n = stream.read(&mut buffer).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8(request).unwrap()
    });

    (port, handle)
}

#[test]
fn no_arguments_prints_usage() {
    let output = client(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn two_arguments_prints_usage() {
    let output = client(&["example.com/", "example.org/"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn help_exits_zero() {
    let output = client(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn empty_url_is_malformed() {
    let output = client(&[""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("client: malformed url"));
}

#[test]
fn scheme_only_is_malformed() {
    let output = client(&["https://"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed url"));
}

#[test]
fn streams_response_to_stdout() {
    let response = "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello, world!";
    let (port, server) = start_mock_server(response);

    let output = client(&[&format!("127.0.0.1:{}/d20", port)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), response);
    assert_eq!(
        server.join().unwrap(),
        format!(
            "GET /d20 HTTP/1.1\nHost: 127.0.0.1:{}\nConnection: close\n\n",
            port
        )
    );
}

#[test]
fn request_is_logged_when_verbose() {
    let (port, server) = start_mock_server("HTTP/1.1 204 No Content\r\n\r\n");

    let output = client(&["-vv", &format!("http://127.0.0.1:{}/", port)]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GET / HTTP/1.1"));
    assert!(server.join().unwrap().starts_with("GET / HTTP/1.1\n"));
}
