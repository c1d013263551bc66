//! Local persistence for favorite organizations
//!
//! A single named JSON slot under the user data directory. Decode and write
//! failures degrade to an empty collection instead of propagating; last full
//! write wins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::Organization;
use crate::error::{Error, Result};

/// File name of the favorites slot
const FAVORITES_SLOT: &str = "favorites.json";

/// Locally persisted favorite-organization record
///
/// Linked to [`Organization`] only by `organization_id`; favorites survive
/// restarts even when the organization list has not been re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteOrganization {
    pub organization_id: u64,
    pub name: String,
    pub avatar_url: String,
}

impl From<&Organization> for FavoriteOrganization {
    fn from(org: &Organization) -> Self {
        Self {
            organization_id: org.id,
            name: org.login.clone(),
            avatar_url: org.avatar_url.clone().unwrap_or_default(),
        }
    }
}

/// File-backed store for favorite organizations
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Open the store at the default user data location
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(&Self::data_dir()?))
    }

    /// Get the data directory path (~/.local/share/browsr on Linux)
    pub fn data_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(Error::Other(
            "Could not determine data directory".to_string(),
        ))?;
        Ok(base.join("browsr"))
    }

    /// Open the store at a specific directory (for testing)
    pub fn open_at(dir: &Path) -> Self {
        Self {
            path: dir.join(FAVORITES_SLOT),
        }
    }

    /// Path of the backing slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all favorites.
    ///
    /// An absent slot is a valid, empty state. A slot that fails to decode
    /// is logged and also treated as empty.
    pub fn load(&self) -> Vec<FavoriteOrganization> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("Failed to read favorites slot: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(favorites) => favorites,
            Err(err) => {
                log::warn!("Failed to decode favorites, treating as empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `favorites`.
    ///
    /// Encode or write failure is logged and leaves the slot unchanged.
    pub fn save(&self, favorites: &[FavoriteOrganization]) {
        let json = match serde_json::to_vec_pretty(favorites) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to encode favorites: {}", err);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create data dir: {}", err);
                return;
            }
        }

        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("Failed to write favorites slot: {}", err);
        }
    }

    /// Append one favorite and persist. Already-favorited ids are a no-op.
    pub fn add(&self, favorite: FavoriteOrganization) {
        let mut favorites = self.load();
        if favorites
            .iter()
            .any(|f| f.organization_id == favorite.organization_id)
        {
            return;
        }
        favorites.push(favorite);
        self.save(&favorites);
    }

    /// Remove by `organization_id` and persist. Unknown ids are a no-op.
    pub fn remove(&self, favorite: &FavoriteOrganization) {
        let mut favorites = self.load();
        favorites.retain(|f| f.organization_id != favorite.organization_id);
        self.save(&favorites);
    }

    /// Delete the stored collection entirely
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => (),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => (),
            Err(err) => log::warn!("Failed to clear favorites slot: {}", err),
        }
    }
}
