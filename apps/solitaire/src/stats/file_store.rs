//! JSON file store.
//!
//! Reads and writes happen under an OS-level exclusive lock on a sibling
//! `<file>.lock`, so several processes (simulator workers, a UI) can share
//! one statistics file. Writes go to `<file>.tmp` first and are renamed into
//! place.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::debug;

use crate::config::stats_path;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::stats::record::{GameOutcome, GameStats};
use crate::stats::store::StatsStore;

#[derive(Debug, Clone)]
pub struct JsonFileStatsStore {
    path: PathBuf,
}

impl JsonFileStatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `SOLITAIRE_STATS_PATH` (or the default file name).
    pub fn from_env() -> Self {
        Self::new(stats_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn with_lock<T>(
        &self,
        f: impl FnOnce(&Self) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable("create stats directory", &e))?;
        }

        let lock_path = self.sibling(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| unavailable("open stats lock file", &e))?;
        FileExt::lock_exclusive(&lock_file).map_err(|e| unavailable("lock stats file", &e))?;
        debug!(lock_path = %lock_path.display(), "stats lock acquired");

        let result = f(self);

        // Dropping the handle releases the lock as well.
        FileExt::unlock(&lock_file).ok();
        result
    }

    fn read_unlocked(&self) -> Result<GameStats, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GameStats::default()),
            Err(e) => return Err(unavailable("read stats file", &e)),
        };
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("{} is not valid stats JSON: {e}", self.path.display()),
            )
        })
    }

    fn write_unlocked(&self, stats: &GameStats) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(stats)
            .map_err(|e| DomainError::infra(InfraErrorKind::Other("serialize".into()), e.to_string()))?;

        let tmp_path = self.sibling(".tmp");
        let mut tmp = File::create(&tmp_path).map_err(|e| unavailable("create temp stats file", &e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.sync_all())
            .map_err(|e| unavailable("write temp stats file", &e))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|e| unavailable("replace stats file", &e))
    }
}

impl StatsStore for JsonFileStatsStore {
    fn load(&self) -> Result<GameStats, DomainError> {
        self.with_lock(Self::read_unlocked)
    }

    fn save(&self, stats: &GameStats) -> Result<(), DomainError> {
        self.with_lock(|store| store.write_unlocked(stats))
    }

    fn record(&self, outcome: GameOutcome) -> Result<GameStats, DomainError> {
        self.with_lock(|store| {
            let mut stats = store.read_unlocked()?;
            stats.record(outcome);
            store.write_unlocked(&stats)?;
            Ok(stats)
        })
    }

    fn upgrade_to_win(&self, score: i32) -> Result<GameStats, DomainError> {
        self.with_lock(|store| {
            let mut stats = store.read_unlocked()?;
            stats.upgrade_to_win(score);
            store.write_unlocked(&stats)?;
            Ok(stats)
        })
    }
}

fn unavailable(operation: &str, err: &io::Error) -> DomainError {
    DomainError::infra(
        InfraErrorKind::StorageUnavailable,
        format!("failed to {operation}: {err}"),
    )
}
