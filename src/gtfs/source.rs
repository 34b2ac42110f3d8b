use std::{
    collections::HashMap,
    fs::{self, File},
    future::Future,
    io::Read,
    path::PathBuf,
};

use zip::ZipArchive;

use crate::gtfs;

/// Transport seam: delivers the raw text of a table at a logical path.
///
/// Any error returned here counts as a transport failure. The loader logs
/// it and carries on with an empty table.
pub trait TableSource: Send + Sync {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, gtfs::Error>> + Send;
}

/// Reads tables out of a zipped feed on disk.
#[derive(Debug, Clone)]
pub struct ZipSource {
    path: PathBuf,
}

impl ZipSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read(&self, name: &str) -> Result<String, gtfs::Error> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)?;
        let index = archive
            .index_for_name(name)
            .ok_or(gtfs::Error::FileNotFound(name.to_string()))?;
        let mut file = archive.by_index(index)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

impl TableSource for ZipSource {
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        self.read(path)
    }
}

/// Reads tables from an unpacked feed directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl TableSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        let path = self.root.join(path);
        if !path.exists() {
            return Err(gtfs::Error::FileNotFound(path.display().to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }
}

/// Tables already held in memory, keyed by logical path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_table(mut self, path: &str, body: &str) -> Self {
        self.tables.insert(path.into(), body.into());
        self
    }
}

impl TableSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        self.tables
            .get(path)
            .cloned()
            .ok_or(gtfs::Error::FileNotFound(path.to_string()))
    }
}
