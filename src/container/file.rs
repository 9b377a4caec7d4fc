use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::config::{Compression, OpenMode};
use super::error::ContainerError;
use super::memory::MemoryContainer;
use super::status::Status;
use super::value::{AttrValue, DataType, VariableInfo};
use super::Container;
use crate::time::Tt2000;

const SNAPSHOT_FORMAT: &str = "imagcdf-container";
const SNAPSHOT_VERSION: u32 = 1;
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// On-disk form of a container session
#[derive(Serialize, Deserialize)]
struct Snapshot<C> {
    format: String,
    version: u32,
    compression: Compression,
    container: C,
}

/// A container session bound to a file path.
///
/// All operations work on an in-memory copy; the file is written by
/// [`FileContainer::close`] (or on drop, as a fallback) when the session
/// was created or modified.
///
/// ```no_run
/// use imagcdf::container::{Compression, FileContainer, OpenMode};
///
/// let session = FileContainer::open("esk_20240101_pt1m_4.cdf", OpenMode::Create, Compression::gzip())?;
/// session.close()?;
/// # Ok::<(), imagcdf::container::ContainerError>(())
/// ```
#[derive(Debug)]
pub struct FileContainer {
    path: PathBuf,
    compression: Compression,
    inner: MemoryContainer,
    dirty: bool,
}

impl FileContainer {
    /// Open or create a container file.
    ///
    /// `compression` applies to created files; an opened file keeps the
    /// compression it was written with.
    pub fn open<P: AsRef<Path>>(
        path: P,
        mode: OpenMode,
        compression: Compression,
    ) -> Result<Self, ContainerError> {
        let path = path.as_ref().to_path_buf();
        let exists = path.exists();
        let display = path.display().to_string();

        match mode {
            OpenMode::ForceCreate => {
                if exists {
                    debug!("Removing existing file {}", display);
                    fs::remove_file(&path)?;
                }
            }
            OpenMode::Create if exists => return Err(ContainerError::FileExists(display)),
            OpenMode::Create => {}
            OpenMode::Open if !exists => return Err(ContainerError::NoSuchFile(display)),
            OpenMode::Open => {
                let snapshot = Self::load(&path)?;
                info!(
                    "Opened container {} ({} compression)",
                    display, snapshot.compression
                );
                return Ok(Self {
                    path,
                    compression: snapshot.compression,
                    inner: snapshot.container,
                    dirty: false,
                });
            }
        }

        info!("Created container {} ({} compression)", display, compression);
        Ok(Self {
            path,
            compression,
            inner: MemoryContainer::new(),
            dirty: true,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compression used when writing the file
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Flush to disk and end the session.
    pub fn close(mut self) -> Result<(), ContainerError> {
        let result = self.flush();
        self.dirty = false;
        result
    }

    fn flush(&mut self) -> Result<(), ContainerError> {
        if !self.dirty {
            return Ok(());
        }

        let snapshot = Snapshot {
            format: SNAPSHOT_FORMAT.to_string(),
            version: SNAPSHOT_VERSION,
            compression: self.compression,
            container: &self.inner,
        };

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        match self.compression.gzip_level() {
            Some(level) => {
                let mut encoder = GzEncoder::new(writer, flate2::Compression::new(level));
                serde_json::to_writer(&mut encoder, &snapshot)
                    .map_err(|e| ContainerError::Io(e.into()))?;
                encoder.finish()?.flush()?;
            }
            None => {
                let mut writer = writer;
                serde_json::to_writer(&mut writer, &snapshot)
                    .map_err(|e| ContainerError::Io(e.into()))?;
                writer.flush()?;
            }
        }

        self.dirty = false;
        info!("Closed container {}", self.path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Snapshot<MemoryContainer>, ContainerError> {
        let mut bytes = Vec::new();
        BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
        Self::decode(&bytes).map_err(|e| match e {
            ContainerError::Corrupt(message) => {
                ContainerError::Corrupt(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    fn decode(bytes: &[u8]) -> Result<Snapshot<MemoryContainer>, ContainerError> {
        let snapshot: Snapshot<MemoryContainer> = if bytes.starts_with(&GZIP_MAGIC) {
            let mut json = Vec::new();
            GzDecoder::new(bytes)
                .read_to_end(&mut json)
                .map_err(|e| ContainerError::Corrupt(e.to_string()))?;
            serde_json::from_slice(&json)
        } else {
            serde_json::from_slice(bytes)
        }
        .map_err(|e| ContainerError::Corrupt(e.to_string()))?;

        if snapshot.format != SNAPSHOT_FORMAT || snapshot.version > SNAPSHOT_VERSION {
            return Err(ContainerError::Corrupt(format!(
                "unsupported snapshot {} v{}",
                snapshot.format, snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Decode file contents into a container without touching the filesystem.
    pub fn parse_snapshot(bytes: &[u8]) -> Result<MemoryContainer, ContainerError> {
        Self::decode(bytes).map(|snapshot| snapshot.container)
    }

    fn modified<T>(&mut self, result: Result<T, ContainerError>) -> Result<T, ContainerError> {
        if result.is_ok() {
            self.dirty = true;
        }
        result
    }
}

impl Drop for FileContainer {
    fn drop(&mut self) {
        if self.dirty {
            warn!(
                "Container {} dropped without close(); flushing",
                self.path.display()
            );
            if let Err(e) = self.flush() {
                warn!("Failed to flush {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Container for FileContainer {
    fn put_global_attr(
        &mut self,
        name: &str,
        entry: usize,
        value: AttrValue,
    ) -> Result<(), ContainerError> {
        let result = self.inner.put_global_attr(name, entry, value);
        self.modified(result)
    }

    fn get_global_attr(&mut self, name: &str, entry: usize) -> Result<AttrValue, ContainerError> {
        self.inner.get_global_attr(name, entry)
    }

    fn delete_global_entry(&mut self, name: &str, entry: usize) -> Result<(), ContainerError> {
        let result = self.inner.delete_global_entry(name, entry);
        self.modified(result)
    }

    fn put_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
        value: AttrValue,
    ) -> Result<(), ContainerError> {
        let result = self.inner.put_variable_attr(attribute, variable, value);
        self.modified(result)
    }

    fn get_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
    ) -> Result<AttrValue, ContainerError> {
        self.inner.get_variable_attr(attribute, variable)
    }

    fn create_variable(&mut self, name: &str, data_type: DataType) -> Result<(), ContainerError> {
        let result = self.inner.create_variable(name, data_type);
        self.modified(result)
    }

    fn inquire_variable(&mut self, name: &str) -> Result<VariableInfo, ContainerError> {
        self.inner.inquire_variable(name)
    }

    fn has_variable(&mut self, name: &str) -> bool {
        self.inner.has_variable(name)
    }

    fn variable_names(&mut self) -> Vec<String> {
        self.inner.variable_names()
    }

    fn max_written_record(&mut self, name: &str) -> Result<Option<usize>, ContainerError> {
        self.inner.max_written_record(name)
    }

    fn put_double_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[f64],
    ) -> Result<(), ContainerError> {
        let result = self.inner.put_double_records(name, first_record, values);
        self.modified(result)
    }

    fn put_tt2000_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[Tt2000],
    ) -> Result<(), ContainerError> {
        let result = self.inner.put_tt2000_records(name, first_record, values);
        self.modified(result)
    }

    fn read_double_records(
        &mut self,
        name: &str,
        out: &mut Vec<f64>,
    ) -> Result<(), ContainerError> {
        self.inner.read_double_records(name, out)
    }

    fn read_tt2000_records(
        &mut self,
        name: &str,
        out: &mut Vec<Tt2000>,
    ) -> Result<(), ContainerError> {
        self.inner.read_tt2000_records(name, out)
    }

    fn last_status(&self) -> &Status {
        self.inner.last_status()
    }
}
