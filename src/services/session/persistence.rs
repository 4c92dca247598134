use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::SessionSnapshot;

pub fn load_snapshot(path: &Path) -> Result<SessionSnapshot> {
    if !path.exists() {
        return Ok(SessionSnapshot::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read session state from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize session state from {}", path.display()))?;
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write session state to {}", path.display()))?;
    Ok(())
}
