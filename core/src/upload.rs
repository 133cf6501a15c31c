use thiserror::Error;

pub const PROCESSING_FAILED_MESSAGE: &str = "Image processing failed, please try again!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFacts {
    pub mime: String,
    pub size: u64,
}

impl FileFacts {
    pub fn new(mime: impl Into<String>, size: u64) -> Self {
        Self {
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select a valid image file!")]
    Missing,
    #[error("Please select a valid image file!")]
    NotImage { mime: String },
    #[error("Image must not exceed 3MB, please choose a smaller image!")]
    TooLarge { size: u64, limit: u64 },
}

pub fn validate_upload(file: Option<&FileFacts>, limit: u64) -> Result<(), UploadRejection> {
    let Some(file) = file else {
        return Err(UploadRejection::Missing);
    };
    if !file.is_image() {
        return Err(UploadRejection::NotImage {
            mime: file.mime.clone(),
        });
    }
    if file.size > limit {
        return Err(UploadRejection::TooLarge {
            size: file.size,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_BYTES;

    #[test]
    fn accepts_image_at_limit() {
        let file = FileFacts::new("image/png", MAX_FILE_BYTES);
        assert_eq!(validate_upload(Some(&file), MAX_FILE_BYTES), Ok(()));
    }

    #[test]
    fn type_is_checked_before_size() {
        let file = FileFacts::new("text/plain", MAX_FILE_BYTES * 4);
        let err = validate_upload(Some(&file), MAX_FILE_BYTES).unwrap_err();
        assert!(matches!(err, UploadRejection::NotImage { .. }));
        assert_eq!(err.to_string(), "Please select a valid image file!");
    }

    #[test]
    fn oversized_image_is_rejected() {
        let file = FileFacts::new("image/jpeg", 4 * 1024 * 1024);
        let err = validate_upload(Some(&file), MAX_FILE_BYTES).unwrap_err();
        assert_eq!(
            err,
            UploadRejection::TooLarge {
                size: 4 * 1024 * 1024,
                limit: MAX_FILE_BYTES
            }
        );
        assert_eq!(
            err.to_string(),
            "Image must not exceed 3MB, please choose a smaller image!"
        );
    }

    #[test]
    fn missing_file_is_rejected() {
        assert_eq!(
            validate_upload(None, MAX_FILE_BYTES),
            Err(UploadRejection::Missing)
        );
    }

    #[test]
    fn empty_mime_is_not_an_image() {
        let file = FileFacts::new("", 10);
        assert!(!file.is_image());
    }
}
