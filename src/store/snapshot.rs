use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::store::item::StudyItem;
use crate::store::memory::MemoryItemStore;
use crate::store::StoreError;
use crate::types::identifiers::ContentHash;

pub const SNAPSHOT_FORMAT_VERSION: &str = "1";

const ITEMS_FILE: &str = "items.json";
const MANIFEST_FILE: &str = "manifest.json";

/// Describes a snapshot directory and lets a loader verify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub format_version: String,
    /// Version of the taxonomy that assigned the stored subjects.
    pub taxonomy_version: ContentHash,
    pub item_count: usize,
    pub items_hash: ContentHash,
    pub created_at: DateTime<Utc>, // informational only
}

impl MemoryItemStore {
    /// Write `items.json` and `manifest.json` into a fresh directory.
    ///
    /// Files are written to a sibling temp dir first and renamed into place,
    /// so `output_dir` either holds a complete snapshot or does not exist.
    pub fn save_snapshot(
        &self,
        output_dir: &Path,
        taxonomy_version: &ContentHash,
    ) -> Result<SnapshotManifest, StoreError> {
        if output_dir.exists() {
            return Err(StoreError::OutputExists(output_dir.to_path_buf()));
        }

        let items_json = serde_json::to_vec_pretty(&self.items)?;
        let items_hash = ContentHash::from_content(&items_json);

        let manifest = SnapshotManifest {
            format_version: SNAPSHOT_FORMAT_VERSION.to_string(),
            taxonomy_version: taxonomy_version.clone(),
            item_count: self.items.len(),
            items_hash,
            created_at: Utc::now(),
        };

        // "sha256:" prefix is 7 chars; the next 12 keep temp dirs distinct per content.
        let temp_suffix = format!("tmp.{}", &manifest.items_hash.as_str()[7..19]);
        let temp_dir = output_dir.with_extension(temp_suffix);

        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(&temp_dir)?;

        write_synced(&temp_dir.join(ITEMS_FILE), &items_json)?;
        write_synced(&temp_dir.join(MANIFEST_FILE), &serde_json::to_vec_pretty(&manifest)?)?;

        fs::rename(&temp_dir, output_dir)?;

        info!(
            dir = %output_dir.display(),
            items = manifest.item_count,
            "wrote item snapshot"
        );
        Ok(manifest)
    }

    /// Load and verify a snapshot written by [`save_snapshot`](Self::save_snapshot).
    pub fn load_snapshot(dir: &Path) -> Result<(Self, SnapshotManifest), StoreError> {
        let manifest_bytes = fs::read(dir.join(MANIFEST_FILE))?;
        let manifest: SnapshotManifest = serde_json::from_slice(&manifest_bytes)?;

        if manifest.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(integrity(
                dir,
                format!("unsupported snapshot format {}", manifest.format_version),
            ));
        }

        let items_bytes = fs::read(dir.join(ITEMS_FILE))?;
        let actual = ContentHash::from_content(&items_bytes);
        if actual != manifest.items_hash {
            return Err(integrity(
                dir,
                format!(
                    "items hash mismatch: manifest says {}, content hashes to {}",
                    manifest.items_hash, actual
                ),
            ));
        }

        let items: Vec<StudyItem> = serde_json::from_slice(&items_bytes)?;
        if items.len() != manifest.item_count {
            return Err(integrity(
                dir,
                format!(
                    "item count mismatch: manifest says {}, found {}",
                    manifest.item_count,
                    items.len()
                ),
            ));
        }

        info!(dir = %dir.display(), items = items.len(), "loaded item snapshot");
        Ok((MemoryItemStore::from_items(items), manifest))
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    Ok(())
}

fn integrity(dir: &Path, reason: String) -> StoreError {
    warn!(dir = %dir.display(), %reason, "rejected item snapshot");
    StoreError::Integrity(reason)
}
