//! 內建的 CMS API 參考文件。
//!
//! 內容原樣寫出，不做任何模板處理。

use crate::core::{Document, DocumentSet, DocumentSource, Result};
use async_trait::async_trait;

pub const ARTICLES: &str = include_str!("articles.md");
pub const CATEGORIES: &str = include_str!("categories.md");
pub const TAGS: &str = include_str!("tags.md");
pub const COMMENTS: &str = include_str!("comments.md");
pub const MEMBER_ARTICLES: &str = include_str!("member_articles.md");

/// 檔名前綴的數字決定輸出順序
pub const BUILTIN_DOCUMENTS: [(&str, &str); 5] = [
    ("01_文章管理API.md", ARTICLES),
    ("02_分类管理API.md", CATEGORIES),
    ("03_标签管理API.md", TAGS),
    ("04_评论管理API.md", COMMENTS),
    ("05_Member文章管理API.md", MEMBER_ARTICLES),
];

pub fn builtin_document_set() -> Result<DocumentSet> {
    let documents = BUILTIN_DOCUMENTS
        .iter()
        .map(|(filename, body)| Document {
            filename: filename.to_string(),
            body: body.to_string(),
        })
        .collect::<Vec<_>>();

    DocumentSet::try_from(documents)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl DocumentSource for BuiltinSource {
    async fn load(&self) -> Result<DocumentSet> {
        builtin_document_set()
    }

    fn describe(&self) -> String {
        "builtin CMS API reference".to_string()
    }
}
