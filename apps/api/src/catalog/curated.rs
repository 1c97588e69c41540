use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::catalog::CatalogError;

/// Curated example résumés keyed by role name. Records are opaque JSON passed
/// straight through to the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ExampleLibrary {
    by_role: HashMap<String, Vec<Value>>,
}

impl ExampleLibrary {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let by_role: HashMap<String, Vec<Value>> = serde_json::from_str(json)?;
        Ok(Self { by_role })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let library = Self::from_json_str(&json)?;
        info!(
            "Loaded curated examples for {} roles from {}",
            library.by_role.len(),
            path.display()
        );
        Ok(library)
    }

    /// Examples for `role`; unknown roles get an empty slice.
    pub fn for_role(&self, role: &str) -> &[Value] {
        self.by_role.get(role).map(Vec::as_slice).unwrap_or(&[])
    }
}
