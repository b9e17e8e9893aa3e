use crate::utils::error::{DocgenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub body: String,
}

/// 依插入順序保存的 filename → body 對應，filename 不可重複
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 (filename, body) 列表建立，遇到重複的 filename 即回傳錯誤
    pub fn from_pairs<I, F, B>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, B)>,
        F: Into<String>,
        B: Into<String>,
    {
        let mut set = Self::new();
        for (filename, body) in pairs {
            set.insert(filename, body)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, filename: impl Into<String>, body: impl Into<String>) -> Result<()> {
        let filename = filename.into();
        if self.contains(&filename) {
            return Err(DocgenError::DuplicateDocumentError { filename });
        }
        self.documents.push(Document {
            filename,
            body: body.into(),
        });
        Ok(())
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.documents.iter().any(|doc| doc.filename == filename)
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|doc| doc.filename == filename)
            .map(|doc| doc.body.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.filename.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl TryFrom<Vec<Document>> for DocumentSet {
    type Error = DocgenError;

    fn try_from(documents: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.filename.as_str()) {
                return Err(DocgenError::DuplicateDocumentError {
                    filename: doc.filename.clone(),
                });
            }
        }
        Ok(Self { documents })
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub filename: String,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmissionResult {
    pub fn success(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            succeeded: true,
            error: None,
        }
    }

    pub fn failure(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            succeeded: false,
            error: Some(error.into()),
        }
    }
}
