use ccflags_core::{Config, FlagSet};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.compilation_database_folder, None);
    assert!(config.extra_flags.is_empty());
    assert_eq!(config.anchor_dir(), PathBuf::new());
    assert!(config.flags.contains(&"-DVPMU_CONFIG".to_string()));
    assert!(config.flags.contains(&"-Wall".to_string()));
}

#[test]
fn test_config_validation_empty_flags() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.flags.clear();
    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Static flag set is empty"));

    config.extra_flags.push("-m64".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_static_flags_order() {
    let config = Config::from_toml_str(
        r#"
        flags = ["-x", "c", "-Iinclude"]
        extra_flags = ["-DLATE", "-Iinclude/late"]
        "#,
    )
    .unwrap();

    assert_eq!(
        config.static_flags(),
        FlagSet::from(["-x", "c", "-Iinclude", "-DLATE", "-Iinclude/late"])
    );
}
