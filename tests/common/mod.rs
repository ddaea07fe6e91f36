#![allow(dead_code)]

use std::path::Path;

/// A response split into its status line, headers and body.
#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn parse(bytes: &[u8]) -> Self {
        let split = bytes
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has no header terminator");

        let head = std::str::from_utf8(&bytes[..split]).expect("head is not UTF-8");
        let mut lines = head.split("\r\n");
        let status_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .map(|line| {
                let (k, v) = line.split_once(": ").expect("malformed header line");
                (k.to_string(), v.to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: bytes[split + 4..].to_vec(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Fake PNG bytes with every awkward byte a text-mode path could mangle.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend((0..=255u8).rev());
    bytes.extend_from_slice(b"\r\n\0\0\r");
    bytes
}

/// Writes the usual document root fixtures into `root`.
pub fn populate_docroot(root: &Path) {
    std::fs::write(root.join("index.html"), "<h1>Hi</h1>").unwrap();
    std::fs::write(root.join("style.css"), "h1 { color: red; }").unwrap();
    std::fs::write(root.join("data.bin"), [1u8, 2, 3, 4]).unwrap();
    std::fs::write(root.join("logo.png"), png_bytes()).unwrap();
}
