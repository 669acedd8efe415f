//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use projecthub_access::{AccessError, Config};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_full_config_file() {
        let file = write_config(
            r#"
access:
  view_only_modules:
    - generate_invoice
    - audit_log
client:
  base_url: https://hub.example.com/api
  timeout_secs: 15
logging:
  level: debug
  json: true
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.client.base_url, "https://hub.example.com/api");
        assert_eq!(config.client.timeout_secs, 15);
        assert!(config.access.view_only_set().contains("audit_log"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_minimal_config_file_uses_defaults() {
        let file = write_config("client:\n  base_url: http://localhost:9000/api\n");

        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.access.view_only_modules, vec!["generate_invoice"]);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_invalid_config_file_is_rejected() {
        let file = write_config("client:\n  base_url: ftp://hub.example.com\n");

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, AccessError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let err = assert_err!(Config::from_file("/nonexistent/access.yaml").await);
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
