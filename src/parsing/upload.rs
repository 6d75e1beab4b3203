//! Acceptance check for uploaded assignment files.

use crate::config::UploadConfig;
use crate::error::{EngineError, EngineResult};

/// Checks that an upload declares itself as a CSV file.
///
/// Both the file name suffix and the declared media type must match the
/// configured rules; the contents are not inspected.
///
/// # Example
///
/// ```
/// use overlap_engine::config::UploadConfig;
/// use overlap_engine::parsing::validate_upload;
///
/// let rules = UploadConfig::default();
/// assert!(validate_upload("assignments.csv", "text/csv", &rules).is_ok());
/// assert!(validate_upload("assignments.xlsx", "text/csv", &rules).is_err());
/// ```
pub fn validate_upload(
    file_name: &str,
    media_type: &str,
    rules: &UploadConfig,
) -> EngineResult<()> {
    let name_ok = file_name.ends_with(rules.accepted_extension.as_str());
    let type_ok = rules.accepted_media_types.iter().any(|t| t == media_type);

    if name_ok && type_ok {
        Ok(())
    } else {
        Err(EngineError::UnsupportedFileType {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
        })
    }
}
