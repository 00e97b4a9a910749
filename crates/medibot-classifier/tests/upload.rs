use std::io::Write;

use medibot_classifier::error::ClassifierError;
use medibot_classifier::upload::{validate_file_name, ImageUpload, MAX_UPLOAD_BYTES};

#[test]
fn allowed_extensions_are_case_insensitive() {
    assert_eq!(validate_file_name("rash.PNG").unwrap(), "png");
    assert_eq!(validate_file_name("arm.photo.jpeg").unwrap(), "jpeg");
    assert_eq!(validate_file_name("x.bmp").unwrap(), "bmp");
}

#[test]
fn other_extensions_are_rejected() {
    for name in ["scan.tiff", "notes.txt", "no_extension"] {
        match validate_file_name(name) {
            Err(ClassifierError::UnsupportedFormat { allowed, .. }) => {
                assert_eq!(allowed, "png, jpg, jpeg, gif, bmp")
            }
            other => panic!("{name}: {other:?}"),
        }
    }
}

#[test]
fn blank_name_and_empty_body_are_rejected() {
    assert!(matches!(validate_file_name("  "), Err(ClassifierError::EmptyFile)));
    assert!(matches!(
        ImageUpload::from_bytes("a.png", Vec::new()),
        Err(ClassifierError::EmptyFile)
    ));
}

#[test]
fn oversized_bytes_are_rejected() {
    let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize + 1];
    match ImageUpload::from_bytes("big.jpg", bytes) {
        Err(ClassifierError::FileTooLarge { max_mb, .. }) => assert_eq!(max_mb, 10),
        other => panic!("{other:?}"),
    }
}

#[test]
fn exactly_the_limit_is_accepted() {
    let upload = ImageUpload::from_bytes("ok.gif", vec![1u8; MAX_UPLOAD_BYTES as usize]).unwrap();
    assert_eq!(upload.mime(), "image/gif");
    assert_eq!(upload.len() as u64, MAX_UPLOAD_BYTES);
}

#[tokio::test]
async fn from_path_reads_and_tags_mime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lesion.JPG");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"\xff\xd8\xff fake jpeg")
        .unwrap();

    let upload = ImageUpload::from_path(&path).await.unwrap();
    assert_eq!(upload.file_name(), "lesion.JPG");
    assert_eq!(upload.mime(), "image/jpeg");
    assert_eq!(upload.into_bytes(), b"\xff\xd8\xff fake jpeg");
}

#[tokio::test]
async fn from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ImageUpload::from_path(&dir.path().join("gone.png")).await;
    assert!(matches!(result, Err(ClassifierError::Io(_))));
}
