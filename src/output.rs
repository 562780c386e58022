//! Output file naming.

use regex::Regex;
use std::path::{Path, PathBuf};

/// Makes a name safe to use as a file stem.
///
/// Spaces become underscores, then anything outside `[A-Za-z0-9_]` is
/// dropped. Distinct names may map to the same stem.
pub fn sanitize(name: &str) -> String {
    let re = Regex::new(r"[^a-zA-Z0-9_]+").unwrap();
    re.replace_all(&name.replace(' ', "_"), "").into_owned()
}

/// Maps names to paths inside an output folder.
#[derive(Debug, Clone)]
pub struct OutputMap {
    pub prefix: PathBuf,
    pub ext: String,
}

impl OutputMap {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            ext: String::from("png"),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn path(&self, name: &str) -> PathBuf {
        let mut path = self.prefix.clone();
        path.push(format!("{}.{}", sanitize(name), self.ext));
        path
    }
}
