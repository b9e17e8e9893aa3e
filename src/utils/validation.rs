use crate::utils::error::{DocgenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 路徑與檔名共用的檢查：不可為空白、不可含 NUL
fn common_problem(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Value cannot be empty or whitespace-only")
    } else if value.contains('\0') {
        Some("Value contains null bytes")
    } else {
        None
    }
}

fn invalid(field_name: &str, value: &str, reason: &str) -> DocgenError {
    DocgenError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// 目錄或 manifest 路徑，允許多層
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    match common_problem(path) {
        Some(reason) => Err(invalid(field_name, path, reason)),
        None => Ok(()),
    }
}

/// 文件名必須是輸出目錄下的單一檔名，不能帶路徑
pub fn validate_filename(field_name: &str, filename: &str) -> Result<()> {
    let reason = common_problem(filename).or_else(|| {
        if filename.contains('/') || filename.contains('\\') {
            Some("Filename must not contain path separators")
        } else if filename == "." || filename == ".." {
            Some("Filename must not be a relative directory reference")
        } else {
            None
        }
    });

    match reason {
        Some(reason) => Err(invalid(field_name, filename, reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "./docs").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "  ").is_err());
        assert!(validate_path("output_dir", "do\0cs").is_err());
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("filename", "01_文章管理API.md").is_ok());
        assert!(validate_filename("filename", "02_b.md").is_ok());
        assert!(validate_filename("filename", "").is_err());
        assert!(validate_filename("filename", "   ").is_err());
        assert!(validate_filename("filename", "sub/02_b.md").is_err());
        assert!(validate_filename("filename", "sub\\02_b.md").is_err());
        assert!(validate_filename("filename", "..").is_err());
        assert!(validate_filename("filename", "a\0.md").is_err());
    }
}
