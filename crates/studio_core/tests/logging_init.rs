use studio_core::{init_logging, logging_status, LoggingError, StudioConfig};

// Logger state is process-global, so the whole lifecycle runs in one test.
#[test]
fn logging_initializes_once_and_rejects_conflicting_reinit() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let log_dir_str = log_dir.to_str().unwrap().to_string();

    assert!(logging_status().is_none());
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::RelativeLogDir(_))
    ));
    assert!(logging_status().is_none());

    init_logging("INFO", log_dir_str.as_str()).unwrap();
    assert!(log_dir.is_dir());
    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir);

    init_logging("info", log_dir_str.as_str()).unwrap();

    assert!(matches!(
        init_logging("debug", log_dir_str.as_str()),
        Err(LoggingError::LevelConflict {
            active: "info",
            requested: "debug"
        })
    ));

    let other_dir = dir.path().join("elsewhere");
    assert!(matches!(
        init_logging("info", other_dir.to_str().unwrap()),
        Err(LoggingError::DirConflict { .. })
    ));

    let config = StudioConfig::from_json_str(&format!(
        r#"{{"log_level":"info","log_dir":{}}}"#,
        serde_json::to_string(&log_dir_str).unwrap()
    ))
    .unwrap();
    assert!(config.init_logging().unwrap());
    assert!(!StudioConfig::default().init_logging().unwrap());
}
