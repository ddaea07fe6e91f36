/// Represents the request line of an incoming HTTP request.
///
/// Only the first line of what the client sent is meaningful; headers and
/// body are never read into this structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token, as sent (e.g. "GET"). Not validated.
    pub method: String,
    /// The raw request path (e.g. "/index.html")
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
        }
    }

    /// Returns `true` if the path contains a `..` segment.
    ///
    /// Such paths are served as-is and can reach outside the working
    /// directory; the connection only logs them.
    pub fn has_parent_segment(&self) -> bool {
        self.path.split('/').any(|segment| segment == "..")
    }
}
