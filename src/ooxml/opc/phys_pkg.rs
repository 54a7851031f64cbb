//! Physical (ZIP) layer of an OPC package.
//!
//! Entries are deflated and stamped with the DOS epoch so that writing the
//! same package twice yields byte-identical archives.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// Physical package writer that streams parts into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl PhysPkgWriter {
    /// Create a new writer backed by an in-memory buffer.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    fn options(method: zip::CompressionMethod) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644)
    }

    /// Write a part with deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, zip::CompressionMethod::Deflated)
    }

    /// Write a part without compression.
    ///
    /// Already-compressed media (JPEG, PNG) gains little from deflate.
    pub fn write_stored(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, zip::CompressionMethod::Stored)
    }

    fn write_with(
        &mut self,
        pack_uri: &PackURI,
        blob: &[u8],
        method: zip::CompressionMethod,
    ) -> Result<()> {
        tracing::trace!(part = %pack_uri, bytes = blob.len(), "writing package entry");
        self.archive
            .start_file(pack_uri.membername(), Self::options(method))?;
        self.archive.write_all(blob)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Check if no entries have been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
