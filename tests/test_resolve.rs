use staticd::http::mime::MimeTable;
use staticd::http::resolve::resolve;

#[test]
fn test_root_maps_to_index() {
    let table = MimeTable::new();
    let root = resolve("/", &table);

    assert_eq!(root.fs_path, "index.html");
    assert_eq!(root.mime_type, "text/html");
    assert_eq!(root, resolve("/index.html", &table));
}

#[test]
fn test_strips_exactly_one_leading_slash() {
    let table = MimeTable::new();

    assert_eq!(resolve("/css/site.css", &table).fs_path, "css/site.css");
    assert_eq!(resolve("//etc/hosts", &table).fs_path, "/etc/hosts");
    assert_eq!(resolve("relative.txt", &table).fs_path, "relative.txt");
}

#[test]
fn test_no_normalization() {
    let table = MimeTable::new();
    let resolved = resolve("/../outside.txt", &table);

    assert_eq!(resolved.fs_path, "../outside.txt");
    assert_eq!(resolved.mime_type, "text/plain");
}

#[test]
fn test_unknown_extension_defaults() {
    let table = MimeTable::new();

    assert_eq!(resolve("/data.bin", &table).mime_type, "application/octet-stream");
    assert_eq!(resolve("/LICENSE", &table).mime_type, "application/octet-stream");
}
