use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one source file inside an analyzed project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileSignature {
    pub project: String,
    pub path: String,
}

impl FileSignature {
    pub fn new(project: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for FileSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.project, self.path)
    }
}

/// Unique structural identifier for a class.
///
/// Used as the join key between a resolved navigation target and an existing
/// graph node, so it derives `Hash`/`Eq` and keys maps directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassSignature {
    pub file: FileSignature,
    pub name: String,
}

impl ClassSignature {
    pub fn new(file: FileSignature, name: impl Into<String>) -> Self {
        Self {
            file,
            name: name.into(),
        }
    }
}

impl fmt::Display for ClassSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.file, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub class: ClassSignature,
    pub name: String,
}

impl MethodSignature {
    pub fn new(class: ClassSignature, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class, self.name)
    }
}
