//! Tests for QuickReplyError type

use super::*;

#[test]
fn test_template_parse_error_display() {
    let error = QuickReplyError::TemplateParse {
        path: PathBuf::from("/tmp/templates.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("templates file"));
    assert!(msg.contains("/tmp/templates.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_duplicate_template_id_display() {
    let error = QuickReplyError::DuplicateTemplateId("greeting".to_string());
    let msg = error.to_string();
    assert!(msg.contains("'greeting'"));
    assert!(msg.contains("unique"));
}

#[test]
fn test_config_parse_error_display() {
    let error = QuickReplyError::ConfigParse {
        path: PathBuf::from("config.toml"),
        message: "invalid type".to_string(),
    };
    assert!(error.to_string().contains("Invalid config file config.toml"));
}

#[test]
fn test_content_required_display() {
    assert_eq!(
        QuickReplyError::ContentRequired.to_string(),
        "Content is required"
    );
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = QuickReplyError::from(io_err);
    assert!(matches!(err, QuickReplyError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let debug_str = format!("{:?}", QuickReplyError::ContentRequired);
    assert!(debug_str.contains("ContentRequired"));
}

#[test]
fn test_user_not_found_display() {
    let error = QuickReplyError::UserNotFound("u7".to_string());
    assert_eq!(error.to_string(), "User 'u7' not found");
}
