use directories::ProjectDirs;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{DifflyError, Result};

/// Key the collapsed path array is stored under.
pub const COLLAPSED_FILES_KEY: &str = "diffly.collapsedFiles";

const STATE_FILENAME: &str = "state.json";

/// Where the set of collapsed file paths lives between page sessions.
pub trait CollapseStore: Send + Sync {
    fn load(&self) -> Result<BTreeSet<String>>;

    fn save(&self, collapsed: &BTreeSet<String>) -> Result<()>;
}

/// JSON file in the platform data directory.
#[derive(Debug, Clone)]
pub struct FileCollapseStore {
    path: PathBuf,
}

impl FileCollapseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_data_dir() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("", "", "diffly").ok_or_else(|| {
            DifflyError::Io(std::io::Error::other("Could not determine data directory"))
        })?;

        Ok(Self::new(proj_dirs.data_dir().join(STATE_FILENAME)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(DifflyError::CorruptedState(
                "state file root must be an object".to_string(),
            )),
            Err(e) => Err(DifflyError::CorruptedState(e.to_string())),
        }
    }
}

impl CollapseStore for FileCollapseStore {
    fn load(&self) -> Result<BTreeSet<String>> {
        let map = self.read_map()?;
        match map.get(COLLAPSED_FILES_KEY) {
            None => Ok(BTreeSet::new()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| DifflyError::CorruptedState(e.to_string())),
        }
    }

    fn save(&self, collapsed: &BTreeSet<String>) -> Result<()> {
        // Other keys in the file are left alone; a corrupted file is replaced
        let mut map = self.read_map().unwrap_or_default();
        map.insert(COLLAPSED_FILES_KEY.to_string(), serde_json::to_value(collapsed)?);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCollapseStore {
    collapsed: Mutex<BTreeSet<String>>,
}

impl MemoryCollapseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollapseStore for MemoryCollapseStore {
    fn load(&self) -> Result<BTreeSet<String>> {
        let collapsed = self
            .collapsed
            .lock()
            .map_err(|e| DifflyError::CorruptedState(e.to_string()))?;
        Ok(collapsed.clone())
    }

    fn save(&self, collapsed: &BTreeSet<String>) -> Result<()> {
        let mut stored = self
            .collapsed
            .lock()
            .map_err(|e| DifflyError::CorruptedState(e.to_string()))?;
        *stored = collapsed.clone();
        Ok(())
    }
}
