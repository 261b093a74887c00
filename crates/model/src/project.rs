use crate::error::Result;
use crate::signatures::{ClassSignature, FileSignature};
use crate::stmt::Cfg;
use crate::ui_tree::UiTree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root holding page sources.
pub const PAGE_SOURCE_ROOT: &str = "entry/src/main/ets";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    #[serde(default)]
    pub cfg: Cfg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    pub signature: ClassSignature,
    /// Engine's "has UI-root marker" predicate, pre-evaluated.
    #[serde(default)]
    pub ui_root: bool,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub view_tree: Option<UiTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileModel {
    pub signature: FileSignature,
    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

/// The analyzed project, as exported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Project root on disk; manifests are resolved against it.
    #[serde(default)]
    pub root: PathBuf,
    #[serde(default)]
    pub files: Vec<FileModel>,
}

impl Project {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileModel> {
        self.files.iter().find(|f| f.signature.path == path)
    }

    #[must_use]
    pub fn class(&self, signature: &ClassSignature) -> Option<&ClassModel> {
        self.file(&signature.file.path)?
            .classes
            .iter()
            .find(|c| c.signature == *signature)
    }

    /// Source path backing a declared page, e.g. `pages/Home` ->
    /// `entry/src/main/ets/pages/Home.ets`.
    #[must_use]
    pub fn page_source_path(page: &str) -> String {
        format!("{PAGE_SOURCE_ROOT}/{page}.ets")
    }

    /// Root UI class of a declared page: the first class in the page's
    /// source file carrying the UI-root marker. `None` when the file is
    /// absent or no class carries the marker.
    #[must_use]
    pub fn page_root_class(&self, page: &str) -> Option<&ClassModel> {
        self.file(&Self::page_source_path(page))?
            .classes
            .iter()
            .find(|c| c.ui_root)
    }
}
