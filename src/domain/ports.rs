use crate::domain::model::DocumentSet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 文件的寫出目標。寫入以 UTF-8 文字為單位，同名檔案整個覆寫。
pub trait Storage: Send + Sync {
    /// 失敗時回傳 `DocgenError::WriteFailure`，帶上檔名
    fn write_document(
        &self,
        filename: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 文件集合的來源（內建內容或 TOML manifest）
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load(&self) -> Result<DocumentSet>;

    fn describe(&self) -> String;
}
