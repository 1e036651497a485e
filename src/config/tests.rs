use super::*;
use figment::Jail;

/// Point HOME at the jail so no real user config leaks in
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
}

fn load_in_jail(custom: Option<&str>) -> figment::error::Result<AppConfig> {
    AppConfig::load_with_custom_config(custom).map_err(|e| format!("{:#}", e).into())
}

#[test]
fn test_config_loads_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let config = load_in_jail(None)?;

        assert_eq!(config.input.default_file, PathBuf::from("numbers.txt"));
        assert_eq!(config.input.unreadable, UnreadablePolicy::Error);
        assert_eq!(config.parse.malformed, MalformedPolicy::Error);
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_local_config_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "numagg.toml",
            r#"
            [input]
            default_file = "data.txt"

            [parse]
            malformed = "zero"
            "#,
        )?;

        let config = load_in_jail(None)?;
        assert_eq!(config.input.default_file, PathBuf::from("data.txt"));
        assert_eq!(config.parse.malformed, MalformedPolicy::Zero);
        // Untouched keys keep their embedded defaults
        assert_eq!(config.input.unreadable, UnreadablePolicy::Error);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("numagg.toml", "[input]\nunreadable = \"error\"\n")?;
        jail.set_env("NUMAGG_INPUT__UNREADABLE", "zero");
        jail.set_env("NUMAGG_PARSE__MALFORMED", "zero");

        let config = load_in_jail(None)?;
        assert_eq!(config.read_options(), ReadOptions::lenient());
        Ok(())
    });
}

#[test]
fn test_custom_config_skips_local_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("numagg.toml", "[input]\ndefault_file = \"local.txt\"\n")?;
        jail.create_file("custom.toml", "[input]\nunreadable = \"zero\"\n")?;

        let config = load_in_jail(Some("custom.toml"))?;
        assert_eq!(config.input.default_file, PathBuf::from("numbers.txt"));
        assert_eq!(config.input.unreadable, UnreadablePolicy::Zero);
        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let result = AppConfig::load_with_custom_config(Some("does-not-exist.toml"));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Config file not found"));
        Ok(())
    });
}

#[test]
fn test_invalid_policy_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("NUMAGG_PARSE__MALFORMED", "ignore");
        assert!(AppConfig::load_with_custom_config(None).is_err());
        Ok(())
    });
}
