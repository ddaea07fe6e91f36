use std::collections::HashMap;

/// Content type used when the extension is missing or unknown.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const KNOWN_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".txt", "text/plain"),
];

/// Fixed mapping from file extension to MIME type.
///
/// Built once at startup and shared read-only between connections. Keys
/// include the leading dot and are matched case-sensitively.
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<&'static str, &'static str>,
}

impl MimeTable {
    pub fn new() -> Self {
        Self {
            types: KNOWN_TYPES.iter().copied().collect(),
        }
    }

    /// Looks up the MIME type for a path.
    ///
    /// The extension is everything from the last `.` to the end of the
    /// string. Paths without a dot, or with an extension not in the table,
    /// map to [`DEFAULT_MIME_TYPE`].
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::mime::MimeTable;
    /// let table = MimeTable::new();
    /// assert_eq!(table.lookup("style.css"), "text/css");
    /// assert_eq!(table.lookup("README"), "application/octet-stream");
    /// ```
    pub fn lookup(&self, path: &str) -> &'static str {
        path.rfind('.')
            .and_then(|dot| self.types.get(&path[dot..]))
            .copied()
            .unwrap_or(DEFAULT_MIME_TYPE)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over `(extension, mime type)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.types.iter().map(|(ext, mime)| (*ext, *mime))
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::new()
    }
}
