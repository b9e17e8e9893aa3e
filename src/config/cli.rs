use crate::core::Storage;
use crate::utils::error::{DocgenError, Result};
use std::path::PathBuf;

/// 以輸出目錄為根的本機檔案儲存
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Storage for LocalStorage {
    /// 截斷並覆寫既有檔案；不建立缺少的目錄
    async fn write_document(&self, filename: &str, body: &str) -> Result<()> {
        tokio::fs::write(self.output_dir.join(filename), body)
            .await
            .map_err(|source| DocgenError::WriteFailure {
                filename: filename.to_string(),
                source,
            })
    }
}
