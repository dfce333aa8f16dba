use countries_domain::config::LogConfig;
use countries_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_from_config_writes_json() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LogConfig {
        level: "info".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        ..LogConfig::default()
    };

    let logger = Logger::builder("integration-file-logging").with_config(&config)?.init()?;
    assert!(logger.has_file_output());

    tracing::info!(code = "NZ", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("at least one line");
    let line: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(line["fields"]["code"], "NZ");
    Ok(())
}
