//! Lokaler Key-Value-Speicher für den Sitzungszustand.

use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Minimaler String-Speicher mit einem Wert pro Schlüssel.
pub trait KeyValueStore {
    /// Liest den Wert eines Schlüssels (`None` = nicht vorhanden).
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Schreibt (oder überschreibt) den Wert eines Schlüssels.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher im Arbeitsspeicher (Tests, Headless-Betrieb).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der gespeicherten Schlüssel
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts gespeichert ist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Verzeichnis-basierter Speicher: eine Datei `<key>.json` pro Schlüssel.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Speicher in `dir` (wird beim ersten Schreiben angelegt)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Basisverzeichnis
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Lesen von {} fehlgeschlagen", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Verzeichnis {} nicht anlegbar", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Schreiben von {} fehlgeschlagen", path.display()))
    }
}
