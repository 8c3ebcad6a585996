use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use xraydb_store::{ChantlerRecord, PhotoabsorptionRecord, ScatteringRecord, XrayDatabase};

use crate::config::{STORE_PATH_VAR, XrayDbConfig};
use crate::error::{Result, XrayDbError};

const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

struct IndexedDb {
    data: XrayDatabase,
    symbol_to_z: HashMap<String, u16>,
    name_to_z: HashMap<String, u16>,
    z_to_element: HashMap<u16, usize>,
    photo_by_symbol: HashMap<String, usize>,
    scatter_by_symbol: HashMap<String, usize>,
    chantler_by_symbol: HashMap<String, usize>,
}

impl IndexedDb {
    fn build(data: XrayDatabase) -> Result<Self> {
        if data.elements.is_empty() {
            return Err(XrayDbError::DataError(
                "reference store has no elements table".to_string(),
            ));
        }

        let mut symbol_to_z = HashMap::new();
        let mut name_to_z = HashMap::new();
        let mut z_to_element = HashMap::new();
        for (idx, elem) in data.elements.iter().enumerate() {
            symbol_to_z.insert(elem.symbol.to_lowercase(), elem.atomic_number);
            name_to_z.insert(elem.name.to_lowercase(), elem.atomic_number);
            z_to_element.insert(elem.atomic_number, idx);
        }

        let photo_by_symbol = data
            .photoabsorption
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.element.clone(), idx))
            .collect();
        let scatter_by_symbol = data
            .scattering
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.element.clone(), idx))
            .collect();
        let chantler_by_symbol = data
            .chantler
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.element.clone(), idx))
            .collect();

        Ok(IndexedDb {
            data,
            symbol_to_z,
            name_to_z,
            z_to_element,
            photo_by_symbol,
            scatter_by_symbol,
            chantler_by_symbol,
        })
    }
}

/// Read-only handle on a loaded reference store.
///
/// The dataset is decoded once and shared: cloning a handle is cheap, and
/// clones may be moved to other threads and queried without locking.
#[derive(Clone)]
pub struct XrayDb {
    db: Arc<IndexedDb>,
    config: XrayDbConfig,
}

impl XrayDb {
    /// Opens the store at `path` with the default configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, XrayDbConfig::default())
    }

    /// Opens the store at `path`, which holds a postcard-encoded
    /// [`XrayDatabase`], optionally zstd-compressed.
    pub fn open_with_config(path: impl AsRef<Path>, config: XrayDbConfig) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| XrayDbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = decode_store(&bytes)?;
        debug!(path = %path.display(), "opened reference store");
        Self::from_database(data, config)
    }

    /// Opens the store named by the `XRAYDB_PATH` environment variable.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(STORE_PATH_VAR)
            .map(PathBuf::from)
            .ok_or(XrayDbError::StoreNotConfigured(STORE_PATH_VAR))?;
        Self::open(path)
    }

    /// Wraps an already-decoded dataset.
    pub fn from_database(data: XrayDatabase, config: XrayDbConfig) -> Result<Self> {
        let db = IndexedDb::build(data)?;
        let data = &db.data;
        debug!(
            version = data.version.last().map(|v| v.tag.as_str()).unwrap_or("unknown"),
            elements = data.elements.len(),
            xray_levels = data.xray_levels.len(),
            xray_transitions = data.xray_transitions.len(),
            photoabsorption = data.photoabsorption.len(),
            scattering = data.scattering.len(),
            chantler = data.chantler.len(),
            waasmaier = data.waasmaier.len(),
            "indexed reference store"
        );
        Ok(XrayDb {
            db: Arc::new(db),
            config,
        })
    }

    /// Access the raw database.
    pub fn raw(&self) -> &XrayDatabase {
        &self.db.data
    }

    pub fn config(&self) -> &XrayDbConfig {
        &self.config
    }

    pub(crate) fn z_by_symbol(&self, symbol: &str) -> Option<u16> {
        self.db.symbol_to_z.get(&symbol.to_lowercase()).copied()
    }

    pub(crate) fn z_by_name(&self, name: &str) -> Option<u16> {
        self.db.name_to_z.get(&name.to_lowercase()).copied()
    }

    pub(crate) fn element_by_z(&self, z: u16) -> Option<&xraydb_store::ElementRecord> {
        self.db
            .z_to_element
            .get(&z)
            .map(|&idx| &self.db.data.elements[idx])
    }

    pub(crate) fn photo_by_symbol(&self, symbol: &str) -> Option<&PhotoabsorptionRecord> {
        self.db
            .photo_by_symbol
            .get(symbol)
            .map(|&idx| &self.db.data.photoabsorption[idx])
    }

    pub(crate) fn scatter_by_symbol(&self, symbol: &str) -> Option<&ScatteringRecord> {
        self.db
            .scatter_by_symbol
            .get(symbol)
            .map(|&idx| &self.db.data.scattering[idx])
    }

    pub(crate) fn chantler_by_symbol(&self, symbol: &str) -> Option<&ChantlerRecord> {
        self.db
            .chantler_by_symbol
            .get(symbol)
            .map(|&idx| &self.db.data.chantler[idx])
    }
}

impl std::fmt::Debug for XrayDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XrayDb")
            .field("elements", &self.db.data.elements.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Decodes store bytes, inflating them first when they start with a zstd frame.
fn decode_store(bytes: &[u8]) -> Result<XrayDatabase> {
    let decompressed;
    let payload = if bytes.starts_with(&ZSTD_MAGIC) {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| XrayDbError::DataError(format!("invalid zstd frame: {e:?}")))?;
        let mut buf = Vec::new();
        decoder
            .read_to_end(&mut buf)
            .map_err(|e| XrayDbError::DataError(format!("failed to decompress store: {e}")))?;
        decompressed = buf;
        decompressed.as_slice()
    } else {
        bytes
    };

    postcard::from_bytes(payload)
        .map_err(|e| XrayDbError::DataError(format!("failed to decode store: {e}")))
}
