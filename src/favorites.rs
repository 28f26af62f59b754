use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{CricketError, Result};
use crate::model::FavoriteSet;

/// Storage key the favorite ids are kept under.
pub const FAVORITES_KEY: &str = "favoriteCricketMatches";

/// File-backed key-value storage for the user's favorite match ids.
///
/// The set lives in `<dir>/favoriteCricketMatches.json` as a JSON array.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{FAVORITES_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved set. A missing file is an empty set.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<FavoriteSet> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FavoriteSet::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        let favorites: FavoriteSet =
            serde_json::from_str(&raw).map_err(|e| CricketError::FavoritesFormat {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(count = favorites.len(), "loaded favorites");
        Ok(favorites)
    }

    /// Write the set, replacing the previous file in one rename.
    #[instrument(skip(self, favorites), fields(path = %self.path.display(), count = favorites.len()))]
    pub fn save(&self, favorites: &FavoriteSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string(favorites).map_err(|e| CricketError::FavoritesFormat {
            path: self.path.clone(),
            source: e,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        debug!("saved favorites");
        Ok(())
    }

    /// Flip membership of `id`, persist, and return the updated set.
    pub fn toggle(&self, id: &str) -> Result<FavoriteSet> {
        let mut favorites = self.load()?;
        favorites.toggle(id);
        self.save(&favorites)?;
        Ok(favorites)
    }

    fn io_error(&self, source: std::io::Error) -> CricketError {
        CricketError::FavoritesIo {
            path: self.path.clone(),
            source,
        }
    }
}
