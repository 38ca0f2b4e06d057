//! Gamification state file with file locking.
//!
//! The CLI keeps one user's state in a JSON file. All access is serialized
//! through a sidecar `<state>.lock` file: readers hold a shared lock,
//! writers hold an exclusive lock for the whole load/modify/save sequence.
//! The state itself is written to a temp file that is renamed into place.

use crate::{Error, GamificationState, Result};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path of the sidecar lock file for a state file
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

fn parent_dir(path: &Path) -> Result<&Path> {
    path.parent().ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "state path missing parent",
        ))
    })
}

/// Open (creating if needed) the lock file guarding `path`
fn open_lock(path: &Path) -> Result<File> {
    std::fs::create_dir_all(parent_dir(path)?)?;
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path(path))?;
    Ok(file)
}

impl GamificationState {
    /// Load state from a file under a shared lock
    ///
    /// Returns default state if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns default state.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No state file found, using default state");
            return Ok(Self::default());
        }

        let lock = match open_lock(path) {
            Ok(lock) => lock,
            Err(e) => {
                tracing::warn!(
                    "Unable to open lock for {:?}: {}. Using defaults.",
                    path,
                    e
                );
                return Ok(Self::default());
            }
        };

        if let Err(e) = lock.lock_shared() {
            tracing::warn!(
                "Unable to lock state file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        let state = Self::read_locked(path);
        lock.unlock()?;
        Ok(state)
    }

    /// Save state to a file under an exclusive lock
    pub fn save(&self, path: &Path) -> Result<()> {
        let lock = open_lock(path)?;
        lock.lock_exclusive()?;
        let result = self.write_locked(path);
        lock.unlock()?;
        result
    }

    /// Load state, modify it, and save it back
    ///
    /// The exclusive lock is held from load to save, so concurrent updates
    /// are applied one after another. The closure's return value is passed
    /// through. Nothing is written if the closure fails.
    pub fn update<F, T>(path: &Path, f: F) -> Result<(Self, T)>
    where
        F: FnOnce(&mut GamificationState) -> Result<T>,
    {
        let lock = open_lock(path)?;
        lock.lock_exclusive()?;

        let result = Self::update_locked(path, f);
        lock.unlock()?;
        result
    }

    fn update_locked<F, T>(path: &Path, f: F) -> Result<(Self, T)>
    where
        F: FnOnce(&mut GamificationState) -> Result<T>,
    {
        let mut state = if path.exists() {
            Self::read_locked(path)
        } else {
            Self::default()
        };
        let value = f(&mut state)?;
        state.write_locked(path)?;
        Ok((state, value))
    }

    /// Read and parse the state file; caller holds the lock
    fn read_locked(path: &Path) -> Self {
        let mut contents = String::new();
        let read = File::open(path)
            .and_then(|file| std::io::BufReader::new(file).read_to_string(&mut contents));
        if let Err(e) = read {
            tracing::warn!(
                "Failed to read state file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Self::default();
        }

        match serde_json::from_str::<GamificationState>(&contents) {
            Ok(state) => {
                tracing::debug!("Loaded gamification state from {:?}", path);
                state
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse state file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Atomically replace the state file; caller holds the lock
    ///
    /// 1. Write to a temp file in the same directory
    /// 2. Sync to disk
    /// 3. Rename over the original
    fn write_locked(&self, path: &Path) -> Result<()> {
        let temp = NamedTempFile::new_in(parent_dir(path)?)?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved gamification state to {:?}", path);
        Ok(())
    }
}
