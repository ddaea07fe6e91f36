const TEXT_PLAIN: &str = "text/plain";

/// HTTP status codes emitted by the server.
///
/// - `Ok` (200): File found and returned
/// - `NotFound` (404): File could not be read, or the request was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be framed and sent.
///
/// The only headers ever emitted are `Content-Type`, taken from
/// `mime_type`, and `Content-Length`, computed from `body` when framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub mime_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, mime_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            mime_type: mime_type.into(),
            body: body.into(),
        }
    }

    /// Creates a 200 OK response carrying file contents.
    pub fn ok(mime_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, mime_type, body)
    }

    /// Creates a 404 Not Found response whose plain-text body is `message`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, TEXT_PLAIN, message.into().into_bytes())
    }

    /// Byte length of the body, as sent in `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
