use crate::http::mime::MimeTable;

const INDEX_PATH: &str = "/index.html";

/// A request path mapped onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Path relative to the document root, without a leading `/`
    pub fs_path: String,
    pub mime_type: &'static str,
}

/// Maps a raw request path to a relative filesystem path and a MIME type.
///
/// `/` becomes `/index.html`, then exactly one leading `/` is stripped. No
/// normalization, decoding or traversal checks are applied.
pub fn resolve(raw_path: &str, mimes: &MimeTable) -> Resolved {
    let path = if raw_path == "/" { INDEX_PATH } else { raw_path };
    let fs_path = path.strip_prefix('/').unwrap_or(path);

    Resolved {
        fs_path: fs_path.to_string(),
        mime_type: mimes.lookup(fs_path),
    }
}
