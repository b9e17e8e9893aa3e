use crate::core::{DocumentSet, DocumentSource};
use crate::utils::error::{DocgenError, Result};
use crate::utils::validation::{validate_filename, validate_path, Validate};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub manifest: ManifestInfo,
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestInfo {
    pub name: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentEntry {
    pub filename: String,
    pub body: Option<String>,
    pub body_file: Option<String>,
}

impl Manifest {
    /// 從 TOML 字串解析 manifest。
    ///
    /// 環境變數在解析之後才替換到字串欄位中，變數值不會再被當成 TOML 讀取。
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut manifest: Manifest =
            toml::from_str(content).map_err(|e| DocgenError::ManifestError {
                message: format!("TOML parsing error: {}", e),
            })?;
        manifest.expand_env_vars();
        Ok(manifest)
    }

    fn expand_env_vars(&mut self) {
        let info = &mut self.manifest;
        for field in [&mut info.name, &mut info.output_dir].into_iter().flatten() {
            *field = substitute_env_vars(field);
        }

        for entry in &mut self.documents {
            entry.filename = substitute_env_vars(&entry.filename);
            for field in [&mut entry.body, &mut entry.body_file].into_iter().flatten() {
                *field = substitute_env_vars(field);
            }
        }
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.manifest.output_dir.as_deref()
    }

    /// 讀取每個文件的內容，body_file 以 base_dir 為相對路徑起點
    pub async fn resolve(&self, base_dir: &Path) -> Result<DocumentSet> {
        let mut set = DocumentSet::new();

        for entry in &self.documents {
            let body = match (&entry.body, &entry.body_file) {
                (Some(body), None) => body.clone(),
                (None, Some(body_file)) => {
                    let path = base_dir.join(body_file);
                    tokio::fs::read_to_string(&path).await.map_err(|e| {
                        DocgenError::ManifestError {
                            message: format!(
                                "cannot read body_file '{}' for {}: {}",
                                path.display(),
                                entry.filename,
                                e
                            ),
                        }
                    })?
                }
                // validate() 已排除其他組合
                _ => {
                    return Err(DocgenError::InvalidConfigValueError {
                        field: format!("documents.{}", entry.filename),
                        value: entry.filename.clone(),
                        reason: "exactly one of body or body_file must be set".to_string(),
                    })
                }
            };
            set.insert(entry.filename.clone(), body)?;
        }

        Ok(set)
    }
}

impl Validate for Manifest {
    fn validate(&self) -> Result<()> {
        if self.documents.is_empty() {
            return Err(DocgenError::MissingConfigError {
                field: "documents".to_string(),
            });
        }

        if let Some(output_dir) = &self.manifest.output_dir {
            validate_path("manifest.output_dir", output_dir)?;
        }

        let mut seen = std::collections::HashSet::new();
        for (index, entry) in self.documents.iter().enumerate() {
            validate_filename(&format!("documents[{}].filename", index), &entry.filename)?;

            if entry.body.is_some() == entry.body_file.is_some() {
                return Err(DocgenError::InvalidConfigValueError {
                    field: format!("documents[{}]", index),
                    value: entry.filename.clone(),
                    reason: "exactly one of body or body_file must be set".to_string(),
                });
            }
            if let Some(body_file) = &entry.body_file {
                validate_path(&format!("documents[{}].body_file", index), body_file)?;
            }

            if !seen.insert(entry.filename.as_str()) {
                return Err(DocgenError::DuplicateDocumentError {
                    filename: entry.filename.clone(),
                });
            }
        }

        Ok(())
    }
}

/// 替換 ${VAR} 形式的環境變數，未定義的保持原樣
fn substitute_env_vars(content: &str) -> String {
    let re = env_var_pattern();
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

/// 從 TOML manifest 檔案載入 DocumentSet
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_manifest(&self) -> Result<Manifest> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let manifest = Manifest::from_toml_str(&content)?;
        manifest.validate()?;
        tracing::debug!(
            path = %self.path.display(),
            documents = manifest.documents.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[async_trait]
impl DocumentSource for ManifestSource {
    async fn load(&self) -> Result<DocumentSet> {
        let manifest = self.read_manifest().await?;
        manifest.resolve(self.base_dir()).await
    }

    fn describe(&self) -> String {
        format!("manifest {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_documents() {
        let manifest = Manifest::from_toml_str(
            r#"
[manifest]
name = "demo"
output_dir = "./out"

[[documents]]
filename = "01_a.md"
body = "Hello\n"

[[documents]]
filename = "02_b.md"
body_file = "b.md"
"#,
        )
        .unwrap();

        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.output_dir(), Some("./out"));
        assert_eq!(manifest.documents[0].body.as_deref(), Some("Hello\n"));
        assert_eq!(manifest.documents[1].body_file.as_deref(), Some("b.md"));
    }

    #[test]
    fn test_env_substitution_keeps_unknown_vars() {
        std::env::set_var("CMS_DOCGEN_TEST_HOST", "docs.example.com");
        let result = substitute_env_vars("curl http://${CMS_DOCGEN_TEST_HOST}/ ${CMS_DOCGEN_UNSET_VAR}");
        assert_eq!(result, "curl http://docs.example.com/ ${CMS_DOCGEN_UNSET_VAR}");
    }

    #[test]
    fn test_env_values_are_inserted_verbatim() {
        std::env::set_var("CMS_DOCGEN_TEST_WIN_DIR", r"C:\new\tmp");
        std::env::set_var("CMS_DOCGEN_TEST_QUOTE", r#"say "hi""#);

        let manifest = Manifest::from_toml_str(
            r#"
[manifest]
output_dir = "${CMS_DOCGEN_TEST_WIN_DIR}"

[[documents]]
filename = "01_a.md"
body = "dir=${CMS_DOCGEN_TEST_WIN_DIR}"

[[documents]]
filename = "02_b.md"
body = "${CMS_DOCGEN_TEST_QUOTE}\n"
"#,
        )
        .unwrap();

        assert_eq!(manifest.output_dir(), Some(r"C:\new\tmp"));
        assert_eq!(manifest.documents[0].body.as_deref(), Some(r"dir=C:\new\tmp"));
        assert_eq!(manifest.documents[1].body.as_deref(), Some("say \"hi\"\n"));
    }

    #[test]
    fn test_shell_substitutions_are_untouched() {
        let text = r#""slug":"new-cat-'$(date +%s)'" -H "Authorization: Bearer $MEMBER_TOKEN""#;
        assert_eq!(substitute_env_vars(text), text);
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let empty = Manifest::from_toml_str("").unwrap();
        assert!(matches!(empty.validate(), Err(DocgenError::MissingConfigError { .. })));

        let both = Manifest::from_toml_str(
            r#"
[[documents]]
filename = "a.md"
body = "x"
body_file = "a.txt"
"#,
        )
        .unwrap();
        assert!(both.validate().is_err());

        let neither = Manifest::from_toml_str("[[documents]]\nfilename = \"a.md\"\n").unwrap();
        assert!(neither.validate().is_err());

        let nested = Manifest::from_toml_str("[[documents]]\nfilename = \"x/a.md\"\nbody = \"\"\n").unwrap();
        assert!(nested.validate().is_err());

        let duplicate = Manifest::from_toml_str(
            r#"
[[documents]]
filename = "a.md"
body = "1"

[[documents]]
filename = "a.md"
body = "2"
"#,
        )
        .unwrap();
        assert!(matches!(
            duplicate.validate(),
            Err(DocgenError::DuplicateDocumentError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_manifest_error() {
        let err = Manifest::from_toml_str("[[documents]\nfilename = ").unwrap_err();
        assert!(matches!(err, DocgenError::ManifestError { .. }));
    }
}
