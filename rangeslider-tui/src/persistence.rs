//! Refinement persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// The last refinement, keyed by the attribute it applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub attribute_name: String,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract the current refinement from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    let (lower, upper) = app.connector.refinement();
    PersistedState {
        attribute_name: app.connector.attribute_name().to_string(),
        lower,
        upper,
    }
}

/// Re-apply a saved refinement if it belongs to the same attribute.
///
/// Call before the first render so the slider starts on the saved selection.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if state.attribute_name != app.connector.attribute_name() {
        return;
    }
    if state.lower.is_none() && state.upper.is_none() {
        return;
    }
    let range = app.connector.range();
    let selection = [
        state.lower.unwrap_or(range.min),
        state.upper.unwrap_or(range.max),
    ];
    if !app.connector.refine(selection) {
        log::info!("saved refinement {selection:?} no longer applies");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("rangeslider_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            attribute_name: "price".into(),
            lower: Some(10.0),
            upper: None,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded, state);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded, PersistedState::default());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("rangeslider_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.attribute_name.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
