//! Version tag validation

use regex::Regex;

use super::error::{ReleaseError, ReleaseResult};

const TAG_PATTERN: &str = r"^v(\d+)\.(\d+)\.(\d+)(-[0-9A-Za-z.-]+)?$";

/// Check that `tag` looks like `v<major>.<minor>.<patch>[-pre]` and is not
/// already in `existing`.
pub fn validate_tag(tag: &str, existing: &[String]) -> ReleaseResult<()> {
    let pattern =
        Regex::new(TAG_PATTERN).map_err(|e| ReleaseError::invalid_tag(tag, e.to_string()))?;

    if !pattern.is_match(tag) {
        return Err(ReleaseError::invalid_tag(
            tag,
            "expected a version like v1.2.3 or v1.2.3-rc.1",
        ));
    }

    if existing.iter().any(|t| t == tag) {
        return Err(ReleaseError::invalid_tag(tag, "tag already exists"));
    }

    Ok(())
}

/// Whether `tag` carries a pre-release suffix
pub fn is_prerelease(tag: &str) -> bool {
    tag.contains('-')
}
