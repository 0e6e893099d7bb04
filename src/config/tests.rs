use super::*;
use std::path::Path;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.editor.command = Some("nvim %s".into());
    config.site.conf_dir = Some("/var/www/app/sites/default".into());
    config.sources.alias_dirs = vec!["/home/u/.confedit/sites".into()];
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_parse_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[site]\nconf_dir = \"/srv/site\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.site.conf_dir.as_deref(), Some(Path::new("/srv/site")));
    assert!(config.editor.command.is_none());
    assert!(config.sources.config_paths.is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_set_and_get_values() {
    let mut config = Config::default();
    config.set_value("editor.command", "code --wait %s").unwrap();
    config.set_value("sources.config_paths", "/etc/a.toml, /etc/b.toml").unwrap();
    config.set_value("site.app_root", "/var/www/app").unwrap();

    assert_eq!(config.get_value("editor.command").unwrap(), "code --wait %s");
    assert_eq!(
        config.get_value("sources.config_paths").unwrap(),
        "/etc/a.toml,/etc/b.toml"
    );
    assert_eq!(config.get_value("site.app_root").unwrap(), "/var/www/app");

    config.set_value("site.app_root", "").unwrap();
    assert!(config.site.app_root.is_none());
}

#[test]
fn test_unknown_key() {
    let mut config = Config::default();
    assert!(config.get_value("open.editor").is_err());
    assert!(config.set_value("nope", "x").is_err());
}

#[test]
fn test_every_listed_key_round_trips() {
    let mut config = Config::default();
    for key in Config::KEYS {
        assert_eq!(config.get_value(key).unwrap(), "", "{key}");
        config.set_value(key, "/srv/x").unwrap();
        assert_eq!(config.get_value(key).unwrap(), "/srv/x", "{key}");
    }
}

#[test]
fn test_unknown_key_lists_valid_keys() {
    let err = Config::default().get_value("editor").unwrap_err().to_string();
    assert!(err.contains("editor.command"), "{err}");
    assert!(err.contains("site.app_root"), "{err}");
}
