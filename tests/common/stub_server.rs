//! Minimal HTTP/1.1 server standing in for the workflow backend in
//! integration tests.
//!
//! Answers every request with a fixed status and body, and records what it
//! received. POST bodies are read up to Content-Length.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// One recorded request.
#[derive(Debug, Clone)]
pub struct Received {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned response the server gives to every request.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl StubReply {
    pub fn json(status: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
        }
    }

    pub fn text(status: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345") and the channel of recorded requests.
/// The server runs until the process exits.
pub fn start(reply: StubReply) -> (String, Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = reply.clone();
            let tx = tx.clone();
            thread::spawn(move || handle(stream, &reply, &tx));
        }
    });
    (format!("http://127.0.0.1:{port}"), rx)
}

/// Binds a port, then closes it again. Connections to the returned base URL
/// are refused.
pub fn dead_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn handle(mut stream: std::net::TcpStream, reply: &StubReply, tx: &Sender<Received>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut raw = Vec::new();
    let mut buf = [0u8; 8192];
    let received = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => n,
            Err(_) => return,
        };
        raw.extend_from_slice(&buf[..n]);
        if let Some(parsed) = parse_request(&raw) {
            break parsed;
        }
        if raw.len() > 64 * 1024 {
            return;
        }
    };

    let _ = tx.send(received);

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.content_type,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Returns None while the request is still incomplete.
fn parse_request(raw: &[u8]) -> Option<Received> {
    let text = std::str::from_utf8(raw).ok()?;
    let (head, rest) = text.split_once("\r\n\r\n")?;

    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_owned();
    let path = parts.next()?.to_owned();

    let mut content_type = None;
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if name.trim().eq_ignore_ascii_case("content-type") {
            content_type = Some(value.to_owned());
        } else if name.trim().eq_ignore_ascii_case("content-length") {
            content_length = value.parse().ok()?;
        }
    }

    if rest.len() < content_length {
        return None;
    }
    Some(Received {
        method,
        path,
        content_type,
        body: rest[..content_length].to_owned(),
    })
}
