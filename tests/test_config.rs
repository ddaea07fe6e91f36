use staticd::config::{Config, DEFAULT_LISTEN_ADDR};
use staticd::server::AcceptPolicy;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8002");
    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.on_accept_error, AcceptPolicy::Fatal);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str("listen_addr: 0.0.0.0:9000\non_accept_error: continue\n").unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.on_accept_error, AcceptPolicy::Continue);
}

#[test]
fn test_config_yaml_missing_fields_use_defaults() {
    let cfg = Config::from_yaml_str("on_accept_error: fatal\n").unwrap();

    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
}

#[test]
fn test_config_yaml_rejects_unknown_fields() {
    assert!(Config::from_yaml_str("document_root: /srv/www\n").is_err());
    assert!(Config::from_yaml_str("on_accept_error: sometimes\n").is_err());
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staticd.yaml");
    std::fs::write(&path, "listen_addr: 127.0.0.1:8100\n").unwrap();

    let cfg = Config::from_file(&path).unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8100");
}

#[test]
fn test_config_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::from_file(dir.path().join("nope.yaml")).unwrap_err();

    assert!(err.to_string().starts_with("failed to read config file"));
}

#[test]
fn test_config_overrides() {
    let mut cfg = Config::default();
    cfg.apply_overrides(|key| match key {
        "LISTEN" => Some("0.0.0.0:3000".to_string()),
        "ACCEPT_POLICY" => Some("continue".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.on_accept_error, AcceptPolicy::Continue);
}

#[test]
fn test_config_no_overrides_keeps_values() {
    let mut cfg = Config::from_yaml_str("listen_addr: 127.0.0.1:9999\n").unwrap();
    cfg.apply_overrides(no_env).unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:9999");
}

#[test]
fn test_config_bad_policy_override() {
    let mut cfg = Config::default();
    let result = cfg.apply_overrides(|key| (key == "ACCEPT_POLICY").then(|| "maybe".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_config_load_from_env() {
    // The only test touching the process environment.
    unsafe {
        std::env::remove_var("STATICD_CONFIG");
        std::env::set_var("LISTEN", "127.0.0.1:8500");
        std::env::remove_var("ACCEPT_POLICY");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8500");
    assert_eq!(cfg.on_accept_error, AcceptPolicy::Fatal);
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}
