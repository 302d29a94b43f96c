use std::path::PathBuf;

use perseus::config::Config;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.port, 8090);
    assert_eq!(cfg.server.backlog, 100);
    assert_eq!(cfg.server.restart_cooldown_secs, 60);
    assert_eq!(cfg.server.signature, "Perseus");
    assert_eq!(cfg.content.root, PathBuf::from("."));
}

#[test]
fn test_from_yaml_overrides() {
    let cfg = Config::from_yaml(
        "server:\n  port: 9000\n  signature: TestServer\ncontent:\n  root: /srv/www\n",
    )
    .unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.signature, "TestServer");
    assert_eq!(cfg.content.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_from_yaml_partial_keeps_defaults() {
    let cfg = Config::from_yaml("server:\n  port: 9001\n").unwrap();

    assert_eq!(cfg.server.port, 9001);
    assert_eq!(cfg.server.backlog, 100);
    assert_eq!(cfg.server.signature, "Perseus");
    assert_eq!(cfg.content.root, PathBuf::from("."));
}

#[test]
fn test_from_yaml_invalid_is_error() {
    assert!(Config::from_yaml("server: [not, a, map]").is_err());
}

#[test]
fn test_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.server.port, cfg2.server.port);
    assert_eq!(cfg1.content.root, cfg2.content.root);
}
