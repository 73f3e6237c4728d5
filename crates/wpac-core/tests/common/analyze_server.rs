//! Minimal HTTP/1.1 server returning one canned response, for dispatcher
//! integration tests.
//!
//! Serves every connection the same configured status line and JSON body,
//! and records each raw request so tests can assert on the wire format.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AnalyzeServerOptions {
    /// HTTP status line tail, e.g. "200 OK" or "400 Bad Request".
    pub status_line: &'static str,
    /// Response body, sent with `Content-Type: application/json`.
    pub body: &'static str,
    /// Hold the response for this long after reading the request.
    pub delay: Option<Duration>,
    /// Accept the connection, read the request, then close without replying
    /// (simulates a server dying mid-exchange).
    pub abrupt_close: bool,
}

impl Default for AnalyzeServerOptions {
    fn default() -> Self {
        Self {
            status_line: "200 OK",
            body: "{}",
            delay: None,
            abrupt_close: false,
        }
    }
}

pub struct AnalyzeServer {
    /// Base URL, e.g. "http://127.0.0.1:41234".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl AnalyzeServer {
    pub fn last_request(&self) -> Option<String> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// Starts a server answering every request with `status_line` and `body`.
/// Runs in a background thread until the process exits.
pub fn start(status_line: &'static str, body: &'static str) -> AnalyzeServer {
    start_with_options(AnalyzeServerOptions {
        status_line,
        body,
        ..AnalyzeServerOptions::default()
    })
}

pub fn start_with_options(opts: AnalyzeServerOptions) -> AnalyzeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let captured = Arc::clone(&captured);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &captured, &opts));
        }
    });
    AnalyzeServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, captured: &Mutex<Vec<String>>, opts: &AnalyzeServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    captured.lock().unwrap().push(request);

    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }
    if opts.abrupt_close {
        return;
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status_line,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads headers plus a Content-Length body. Returns None on a malformed or
/// timed-out request.
fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(header_end) = find_blank_line(&data) {
            let headers = String::from_utf8_lossy(&data[..header_end]);
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    if data.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&data).into_owned())
    }
}

fn find_blank_line(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}
