use serde::Serialize;

/// A file that was skipped during a detection pass.
///
/// Produced when a file cannot be read or parsed. The pass keeps going; the
/// warning is surfaced to the user by whichever host ran the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWarning {
    pub file_path: String,
    pub message: String,
}

impl std::fmt::Display for FileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.file_path, self.message)
    }
}
