//! Tests for configuration file loading and precedence.

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::fs;

/// Write `contents` to a per-test file in the temp dir.
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("logview_test_{}_{}.toml", name, std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// RAII guard removing an env var on creation and on drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== Paths =====

#[test]
fn default_config_path_contains_logview_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("logview") && path_str.ends_with("config.toml"),
            "Path should contain 'logview' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_logview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("logview.log"),
        "Default log path should end with 'logview.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None), "Missing config file should not be an error");
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = temp_config(
        "valid",
        r#"
follow = false
line_wrap = false
table_view = true
redraw_interval_ms = 250
filter_delay_ms = 50
log_file_path = "/tmp/custom.log"
"#,
    );

    let config = load_config_file(&path)
        .expect("Should parse valid TOML")
        .expect("File exists");
    assert_eq!(config.follow, Some(false));
    assert_eq!(config.line_wrap, Some(false));
    assert_eq!(config.table_view, Some(true));
    assert_eq!(config.redraw_interval_ms, Some(250));
    assert_eq!(config.filter_delay_ms, Some(50));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/custom.log")));

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = temp_config("invalid", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let path = temp_config("unknown", "theme = \"dark\"\n");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let path = temp_config("partial", "table_view = true\n");

    let config = load_config_file(&path).expect("parses").expect("exists");
    assert_eq!(config.table_view, Some(true));
    assert_eq!(config.follow, None);

    fs::remove_file(path).ok();
}

// ===== merge_config =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert!(config.follow);
    assert!(config.line_wrap);
    assert!(!config.table_view);
    assert_eq!(config.redraw_interval(), Duration::from_millis(100));
    assert_eq!(config.filter_delay(), Duration::from_millis(300));
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_only_set_fields() {
    let file = ConfigFile {
        line_wrap: Some(false),
        redraw_interval_ms: Some(40),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();
    assert!(!resolved.line_wrap);
    assert_eq!(resolved.redraw_interval_ms, 40);
    assert_eq!(resolved.follow, defaults.follow);
    assert_eq!(resolved.filter_delay_ms, defaults.filter_delay_ms);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

// ===== Env overrides =====

mod env_overrides {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for yes in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(yes), Some(true), "{yes}");
        }
        for no in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool(no), Some(false), "{no}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn overrides_each_flag() {
        let result = apply_env_overrides_with(
            ResolvedConfig::default(),
            lookup(&[(ENV_FOLLOW, "0"), (ENV_LINE_WRAP, "off"), (ENV_TABLE_VIEW, "yes")]),
        );
        assert!(!result.follow);
        assert!(!result.line_wrap);
        assert!(result.table_view);
    }

    #[test]
    fn unrecognized_value_is_ignored() {
        let base = ResolvedConfig::default();
        let result = apply_env_overrides_with(base.clone(), lookup(&[(ENV_FOLLOW, "sometimes")]));
        assert_eq!(result, base);
    }

    #[test]
    #[serial(logview_env)]
    fn apply_env_overrides_reads_process_env() {
        let _guard = EnvGuard::new(ENV_TABLE_VIEW);
        env::set_var(ENV_TABLE_VIEW, "true");

        let result = apply_env_overrides(ResolvedConfig::default());
        assert!(result.table_view);
    }

    #[test]
    #[serial(logview_env)]
    fn apply_env_overrides_no_change_when_unset() {
        let _follow = EnvGuard::new(ENV_FOLLOW);
        let _wrap = EnvGuard::new(ENV_LINE_WRAP);
        let _table = EnvGuard::new(ENV_TABLE_VIEW);

        let base = ResolvedConfig::default();
        assert_eq!(apply_env_overrides(base.clone()), base);
    }
}

// ===== Config path precedence =====

#[test]
#[serial(logview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let explicit = temp_config("explicit", "table_view = true\n");
    let from_env = temp_config("env", "table_view = false\n");
    env::set_var(ENV_CONFIG, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("parses")
        .expect("exists");
    assert_eq!(config.table_view, Some(true), "Explicit path beats LOGVIEW_CONFIG");

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(logview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let from_env = temp_config("env_only", "line_wrap = false\n");
    env::set_var(ENV_CONFIG, &from_env);

    let config = load_config_with_precedence(None)
        .expect("parses")
        .expect("exists");
    assert_eq!(config.line_wrap, Some(false));

    fs::remove_file(from_env).ok();
}

// ===== CLI overrides =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
fn apply_cli_overrides_applies_set_flags() {
    let overrides = CliOverrides {
        follow: Some(false),
        line_wrap: None,
        table_view: Some(true),
    };
    let result = apply_cli_overrides(ResolvedConfig::default(), overrides);
    assert!(!result.follow);
    assert!(result.line_wrap);
    assert!(result.table_view);
}

#[test]
#[serial(logview_env)]
fn precedence_chain_cli_beats_env_beats_file() {
    let _follow = EnvGuard::new(ENV_FOLLOW);
    let _wrap = EnvGuard::new(ENV_LINE_WRAP);
    let _table = EnvGuard::new(ENV_TABLE_VIEW);
    let path = temp_config("chain", "follow = false\nline_wrap = false\nfilter_delay_ms = 10\n");
    env::set_var(ENV_LINE_WRAP, "true");
    env::set_var(ENV_FOLLOW, "true");

    let overrides = CliOverrides {
        follow: Some(false),
        ..CliOverrides::default()
    };
    let config = resolve(Some(path.clone()), overrides).expect("resolves");

    assert_eq!(config.filter_delay_ms, 10, "file beats default");
    assert!(config.line_wrap, "env beats file");
    assert!(!config.follow, "cli beats env");

    fs::remove_file(path).ok();
}
