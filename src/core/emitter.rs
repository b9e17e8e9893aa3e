use crate::core::{DocumentSet, EmissionResult, Storage};

/// 將 DocumentSet 逐一寫入 Storage。
///
/// 單一文件寫入失敗只會記錄為失敗結果，不會中斷其餘文件，
/// 也不會把錯誤傳回呼叫端。
pub struct DocumentEmitter<S: Storage> {
    storage: S,
}

impl<S: Storage> DocumentEmitter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    fn storage(&self) -> &S {
        &self.storage
    }

    /// 依插入順序寫入每個文件，每個輸入項目恰好回傳一筆結果
    pub async fn emit(&self, documents: &DocumentSet) -> Vec<EmissionResult> {
        let mut results = Vec::with_capacity(documents.len());

        for doc in documents {
            match self.storage.write_document(&doc.filename, &doc.body).await {
                Ok(()) => {
                    tracing::debug!(
                        filename = %doc.filename,
                        bytes = doc.body.len(),
                        "document written"
                    );
                    results.push(EmissionResult::success(&doc.filename));
                }
                Err(e) => {
                    tracing::warn!(filename = %doc.filename, error = %e, "document write failed");
                    results.push(EmissionResult::failure(&doc.filename, e.to_string()));
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{DocgenError, Result};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 記憶體內的 Storage，可指定某些檔名寫入失敗
    #[derive(Default)]
    struct MemoryStorage {
        files: Mutex<HashMap<String, String>>,
        writes: Mutex<Vec<String>>,
        failing: Vec<String>,
    }

    impl MemoryStorage {
        fn stored(&self, filename: &str) -> Option<String> {
            self.files.lock().unwrap().get(filename).cloned()
        }
    }

    impl Storage for MemoryStorage {
        async fn write_document(&self, filename: &str, body: &str) -> Result<()> {
            self.writes.lock().unwrap().push(filename.to_string());
            if self.failing.iter().any(|f| f == filename) {
                return Err(DocgenError::WriteFailure {
                    filename: filename.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.files
                .lock()
                .unwrap()
                .insert(filename.to_string(), body.to_string());
            Ok(())
        }
    }

    fn sample_set() -> DocumentSet {
        DocumentSet::from_pairs([("01_a.md", "Hello\n"), ("02_b.md", "World\n"), ("03_c.md", "!\n")])
            .unwrap()
    }

    #[tokio::test]
    async fn test_one_result_per_document_in_order() {
        let emitter = DocumentEmitter::new(MemoryStorage::default());
        let results = emitter.emit(&sample_set()).await;

        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["01_a.md", "02_b.md", "03_c.md"]);
        assert!(results.iter().all(|r| r.succeeded && r.error.is_none()));
        assert_eq!(
            *emitter.storage().writes.lock().unwrap(),
            vec!["01_a.md", "02_b.md", "03_c.md"]
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_documents() {
        let storage = MemoryStorage {
            failing: vec!["02_b.md".to_string()],
            ..Default::default()
        };
        let emitter = DocumentEmitter::new(storage);
        let results = emitter.emit(&sample_set()).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].succeeded);
        assert!(!results[1].succeeded);
        assert!(results[1].error.as_deref().unwrap().contains("read-only"));
        assert!(results[2].succeeded);

        assert_eq!(emitter.storage().stored("03_c.md").as_deref(), Some("!\n"));
        assert_eq!(emitter.storage().stored("02_b.md"), None);
    }

    #[tokio::test]
    async fn test_empty_set_yields_no_results() {
        let emitter = DocumentEmitter::new(MemoryStorage::default());
        assert!(emitter.emit(&DocumentSet::new()).await.is_empty());
    }
}
