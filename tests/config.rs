#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timegrid::libs::config::{CalendarConfig, Config, MatchConfig, ServerConfig, API_URL_ENV, CONFIG_FILE_NAME};
    use timegrid::libs::data_storage::DataStorage;

    /// HOME and TIMEGRID_API_URL are process-wide; tests take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary home.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                api_url: "http://tracker.local:5000".to_string(),
            }
        }

        fn teardown(self) {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
        assert!(config.matching.is_none());
        assert!(config.calendar.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                timeout_secs: 3,
            }),
            matching: Some(MatchConfig {
                window_minutes: 15,
                ..MatchConfig::default()
            }),
            calendar: None,
        };
        config.save().unwrap();

        let read = Config::read().unwrap();
        assert_eq!(read.server, config.server);
        assert_eq!(read.matching.unwrap().window_minutes, 15);
        assert!(read.calendar.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_sections_are_not_written(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_timeout_defaults_when_absent(ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, format!(r#"{{"server": {{"api_url": "{}"}}}}"#, ctx.api_url)).unwrap();

        let server = Config::read().unwrap().server.unwrap();
        assert_eq!(server.api_url, ctx.api_url);
        assert_eq!(server.timeout_secs, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());
        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_server_url(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                timeout_secs: 3,
            }),
            ..Config::default()
        };
        assert_eq!(config.resolved_server().unwrap().api_url, ctx.api_url);

        std::env::set_var(API_URL_ENV, "http://override:8080");
        let server = config.resolved_server().unwrap();
        assert_eq!(server.api_url, "http://override:8080");
        assert_eq!(server.timeout_secs, 3);

        let server = Config::default().resolved_server().unwrap();
        assert_eq!(server.api_url, "http://override:8080");
        assert_eq!(server.timeout_secs, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_no_server_without_config_or_env(_ctx: &mut ConfigTestContext) {
        assert!(Config::default().resolved_server().is_none());
    }

    #[test]
    fn test_section_defaults() {
        let matching = MatchConfig::default();
        assert_eq!(matching.window_minutes, 10);
        assert_eq!(matching.min_interval_seconds, 60);
        assert_eq!(matching.duration_floor_seconds, 30);
        assert_eq!(matching.duration_ratio, 0.2);

        let calendar = CalendarConfig::default();
        assert_eq!(calendar.goal_hours_per_day, 6.5);
        assert_eq!(calendar.low_hours_per_day, 5.0);
        assert_eq!(calendar.max_hours_per_day, 8.0);
    }
}
