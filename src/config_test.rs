use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn invalid_port_is_config_error() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ServerError::ConfigParse(_)));
    assert_eq!(err.to_string(), "config parse failed: invalid PORT: eighty");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 3000, site_root: None };
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}
