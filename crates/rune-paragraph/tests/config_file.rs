use std::fs;

use anyhow::Result;
use rune_paragraph::{Alignment, ConfigError, ParagraphConfig};

#[test]
fn loads_config_from_disk() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("paragraph.toml");
    fs::write(
        &path,
        r#"
        target_width = 480.0
        alignment = "end"
        line_padding = 2.0
        "#,
    )?;

    let config = ParagraphConfig::load_from_file(&path)?;
    assert_eq!(config.target_width, 480.0);
    assert_eq!(config.alignment, Alignment::End);
    assert_eq!(config.line_padding, 2.0);
    Ok(())
}

#[test]
fn missing_file_is_io_error() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let err = ParagraphConfig::load_from_file(temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    Ok(())
}

#[test]
fn invalid_width_on_disk_is_rejected() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("paragraph.toml");
    fs::write(&path, "target_width = 0.0\n")?;

    let err = ParagraphConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWidth(w) if w == 0.0));
    assert!(err.to_string().contains("positive"));
    Ok(())
}

#[test]
fn unknown_alignment_is_a_parse_error() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("paragraph.toml");
    fs::write(&path, "target_width = 100.0\nalignment = \"diagonal\"\n")?;

    let err = ParagraphConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    Ok(())
}
