//! SQLite-based avatar cache storage with file blob support
//!
//! Stores small images inline in SQLite, large images (>10KB) as files.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Images larger than this are stored as external blobs
const INLINE_THRESHOLD: usize = 10 * 1024; // 10KB

type Result<T> = std::result::Result<T, CacheError>;

/// SQLite-backed avatar storage with file blob support
pub struct CacheStorage {
    conn: Connection,
    blobs_dir: PathBuf,
}

impl CacheStorage {
    /// Open or create cache storage at the default XDG cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir)
    }

    /// Get the cache directory path (~/.cache/browsr on Linux/macOS)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("browsr"))
    }

    /// Open cache storage at a specific directory (for testing)
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join("avatars.db");
        let blobs_dir = cache_dir.join("blobs");
        std::fs::create_dir_all(&blobs_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create blobs dir: {}", e)))?;

        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Avatar cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            Self::nuke(&db_path, &blobs_dir)?;
            return Self::open_at(cache_dir);
        }

        // Initialize schema
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS avatars (
                cache_key TEXT PRIMARY KEY NOT NULL,
                source_url TEXT NOT NULL,
                data BLOB,
                blob_path TEXT,
                created_at INTEGER NOT NULL,
                size_bytes INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_source_url ON avatars(source_url);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn, blobs_dir })
    }

    /// Get cached image bytes, if present
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let result: Option<(Option<Vec<u8>>, Option<String>)> = self
            .conn
            .query_row(
                "SELECT data, blob_path FROM avatars WHERE cache_key = ?1",
                [key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match result {
            Some((Some(data), None)) => Ok(Some(data)),
            Some((None, Some(blob_path))) => {
                let full_path = self.blobs_dir.join(&blob_path);
                match std::fs::read(&full_path) {
                    Ok(data) => Ok(Some(data)),
                    Err(e) => {
                        log::warn!("Failed to read blob {}: {}", blob_path, e);
                        // Delete stale entry
                        let _ = self
                            .conn
                            .execute("DELETE FROM avatars WHERE cache_key = ?1", [key]);
                        Ok(None)
                    }
                }
            }
            _ => Ok(None),
        }
    }

    /// Store image bytes, replacing any previous entry for the same key
    pub fn put(&self, key: &str, url: &str, data: &[u8]) -> Result<()> {
        let now = Utc::now().timestamp();

        if data.len() <= INLINE_THRESHOLD {
            // Store inline in SQLite
            self.conn.execute(
                "INSERT OR REPLACE INTO avatars
                 (cache_key, source_url, data, blob_path, created_at, size_bytes)
                 VALUES (?1, ?2, ?3, NULL, ?4, ?5)",
                params![key, url, data, now, data.len()],
            )?;
        } else {
            // Store as external blob
            let blob_path = self.write_blob(key, data)?;
            self.conn.execute(
                "INSERT OR REPLACE INTO avatars
                 (cache_key, source_url, data, blob_path, created_at, size_bytes)
                 VALUES (?1, ?2, NULL, ?3, ?4, ?5)",
                params![key, url, blob_path, now, data.len()],
            )?;
        }
        Ok(())
    }

    /// Clear all cache entries
    pub fn clear_all(&self) -> Result<ClearStats> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM avatars", [], |r| r.get(0))?;

        self.conn.execute("DELETE FROM avatars", [])?;

        // Clear blobs directory
        if self.blobs_dir.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.blobs_dir) {
                log::warn!("Failed to clear blobs directory: {}", e);
            }
            std::fs::create_dir_all(&self.blobs_dir)
                .map_err(|e| CacheError::Io(format!("Failed to recreate blobs dir: {}", e)))?;
        }

        Ok(ClearStats {
            entries_removed: count as usize,
        })
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let total_entries: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM avatars", [], |r| r.get(0))?;

        let total_size: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(size_bytes), 0) FROM avatars",
            [],
            |r| r.get(0),
        )?;

        let oldest: Option<i64> = self
            .conn
            .query_row("SELECT MIN(created_at) FROM avatars", [], |r| r.get(0))
            .optional()?
            .flatten();

        let newest: Option<i64> = self
            .conn
            .query_row("SELECT MAX(created_at) FROM avatars", [], |r| r.get(0))
            .optional()?
            .flatten();

        Ok(CacheStats {
            total_entries: total_entries as usize,
            total_size_bytes: total_size as usize,
            oldest_entry: oldest,
            newest_entry: newest,
        })
    }

    /// Write a blob file, sharded by first 2 chars of key
    fn write_blob(&self, key: &str, data: &[u8]) -> Result<String> {
        let shard = &key[..2.min(key.len())];
        let shard_dir = self.blobs_dir.join(shard);
        std::fs::create_dir_all(&shard_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create shard dir: {}", e)))?;

        let filename = format!("{}.img", key);
        let rel_path = format!("{}/{}", shard, filename);
        let full_path = shard_dir.join(&filename);

        std::fs::write(&full_path, data)
            .map_err(|e| CacheError::Io(format!("Failed to write blob: {}", e)))?;

        Ok(rel_path)
    }

    /// Nuke the cache (delete DB and all blobs)
    fn nuke(db_path: &Path, blobs_dir: &Path) -> Result<()> {
        if db_path.exists() {
            std::fs::remove_file(db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
        }
        if blobs_dir.exists() {
            std::fs::remove_dir_all(blobs_dir)
                .map_err(|e| CacheError::Io(format!("Failed to remove blobs dir: {}", e)))?;
        }
        Ok(())
    }
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_size_bytes: usize,
    pub oldest_entry: Option<i64>,
    pub newest_entry: Option<i64>,
}
