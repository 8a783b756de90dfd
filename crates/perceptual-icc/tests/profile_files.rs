//! Loading profiles from disk.

use std::io::Write;

use perceptual_icc::{IccError, Profile, Signature, StandardProfile, TextTag};

// ============================================================================
// Failure cases
// ============================================================================

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Profile::from_file(&dir.path().join("missing.icc"));
    assert!(matches!(result, Err(IccError::Io(_))));
}

#[test]
fn directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Profile::from_file(dir.path()), Err(IccError::Io(_))));
}

#[test]
fn garbage_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not an ICC profile").unwrap();
    assert!(matches!(Profile::from_file(file.path()), Err(IccError::LoadFailed(_))));
}

// ============================================================================
// Success cases
// ============================================================================

#[test]
fn saved_profile_reloads_with_metadata() {
    let source = StandardProfile::DisplayP3.to_profile().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    let loaded = Profile::from_file(file.path()).unwrap();
    assert!(loaded.is_rgb());
    assert_eq!(loaded.color_space(), Signature::RGB);
    assert_eq!(loaded.device_class(), source.device_class());
    assert_eq!(loaded.tag_signatures().len(), source.tag_signatures().len());
    assert_eq!(loaded.version_parts(), source.version_parts());
}

#[test]
fn builtin_srgb_has_text() {
    let srgb = Profile::srgb();
    assert!(srgb.text(TextTag::Description).is_some());
    assert!(srgb.text(TextTag::Copyright).is_some());
    assert!(srgb.tag_signatures().contains(&Signature(*b"cprt")));
}
