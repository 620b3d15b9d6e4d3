use std::path::Path;

use anyhow::Context;

/// Read a JSON input document into a string.
pub fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}
