/// Catalogue file loader
///
/// Reads the JSON catalogue from its fixed relative path and parses it
/// into `Vec<TreeRecord>`. One attempt per call: no retry, no timeout,
/// no caching. Every failure is logged here and surfaced as a typed
/// `LoadError`; nothing is ever raised past this boundary.

use thiserror::Error;

use super::data::TreeRecord;

/// Fixed relative path of the catalogue file
pub const DATA_PATH: &str = "data/trees.json";

/// Why a catalogue load failed. Callers currently treat both causes
/// identically, but the distinction is kept for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Load and parse the catalogue file
pub async fn load_catalogue(path: String) -> Result<Vec<TreeRecord>, LoadError> {
    let result = read_and_parse(&path).await;

    match &result {
        Ok(catalogue) => println!("🌳 Loaded {} records from {}", catalogue.len(), path),
        Err(e) => eprintln!("⚠️  {}", e),
    }

    result
}

async fn read_and_parse(path: &str) -> Result<Vec<TreeRecord>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| LoadError::Read {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let result = load_catalogue("/nonexistent/trees.json".to_string()).await;

        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let path = std::env::temp_dir().join("bonsai-catalogue-malformed.json");
        std::fs::write(&path, "this is not json").unwrap();

        let result = load_catalogue(path.to_string_lossy().to_string()).await;

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_well_formed_catalogue_loads() {
        let path = std::env::temp_dir().join("bonsai-catalogue-wellformed.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "Sam", "species": "Juniper", "style": "Informal"}]"#,
        )
        .unwrap();

        let catalogue = load_catalogue(path.to_string_lossy().to_string())
            .await
            .unwrap();

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue[0].id, "1");
        assert_eq!(catalogue[0].name, "Sam");
    }
}
