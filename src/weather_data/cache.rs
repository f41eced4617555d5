//! Compact binary encoding of snapshots for on-device caches.

use crate::error::MeteocoreError;
use crate::types::snapshot::WeatherSnapshot;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::debug;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

impl WeatherSnapshot {
    /// Encodes the snapshot, including its persisted source, with bincode.
    ///
    /// # Errors
    ///
    /// [`MeteocoreError::CacheEncode`] if bincode fails to encode a field.
    pub fn to_cache_bytes(&self) -> Result<Vec<u8>, MeteocoreError> {
        let bytes = bincode::serde::encode_to_vec(self, BINCODE_CONFIG)
            .map_err(|e| MeteocoreError::CacheEncode(Box::from(e)))?;
        debug!("Encoded snapshot for {} into {} bytes", self.timezone, bytes.len());
        Ok(bytes)
    }

    /// Decodes bytes produced by [`WeatherSnapshot::to_cache_bytes`].
    ///
    /// # Errors
    ///
    /// [`MeteocoreError::CacheDecode`] if the bytes are truncated or were written by an
    /// incompatible version.
    pub fn from_cache_bytes(bytes: &[u8]) -> Result<Self, MeteocoreError> {
        let (snapshot, _) =
            bincode::serde::decode_from_slice::<WeatherSnapshot, _>(bytes, BINCODE_CONFIG)
                .map_err(|e| MeteocoreError::CacheDecode(Box::from(e)))?;
        Ok(snapshot)
    }
}
