//! Builders created from configuration files

use rezizer::{RezizerConfig, UrlBuilder};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(yaml.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_signed_builder_from_config_file() {
    let file = write_config(
        r#"
server_url: "http://img.example.com"
secret: "mysecret"
logging:
  level: warn
  format: pretty
"#,
    );

    let config = RezizerConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let mut url = UrlBuilder::from_config(&config);
    url.resize(300, 200).unwrap().with("/path/to/image.jpg");
    assert!(url.is_signed());
    assert_eq!(
        url.generate(),
        "http://img.example.com/3Y3XZIr8T3zOZb1z4pmt2SZdMFA=/200x300/path/to/image.jpg"
    );
}

#[test]
fn test_unsigned_builder_from_config_file() {
    let file = write_config("server_url: \"http://img.example.com\"\n");

    let config = RezizerConfig::from_file(file.path()).unwrap();
    let mut url = UrlBuilder::from_config(&config);
    url.resize(300, 200).unwrap().with("/path/to/image.jpg");

    assert!(!url.is_signed());
    assert_eq!(url.server_url(), "http://img.example.com");
    assert_eq!(
        url.generate(),
        "http://img.example.com/200x300/path/to/image.jpg"
    );
}

#[test]
fn test_secret_from_environment() {
    std::env::set_var("REZIZER_IT_SECRET", "mysecret");
    let file = write_config(
        "server_url: \"http://img.example.com\"\nsecret: \"${REZIZER_IT_SECRET}\"\n",
    );

    let config = RezizerConfig::from_file(file.path()).unwrap();
    std::env::remove_var("REZIZER_IT_SECRET");

    assert_eq!(config.secret.as_deref(), Some("mysecret"));
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let file = write_config("server_url: [unterminated\n");
    assert!(RezizerConfig::from_file(file.path()).is_err());
}
