// src/listing.rs

//! Reading the target directory.
//!
//! The existence check and the actual read are two separate syscalls, so the
//! directory can disappear (or change permissions) in between. That race is
//! accepted: whatever the read then reports surfaces as `ListingError::Io`.

use std::{fs, io, path::Path};
use thiserror::Error;

/// Entry names of one directory, in the order the OS returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<String>,
}

impl Listing {
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Diretório não encontrado")]
    NotFound,

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Non-recursive listing of `target`. Files and sub-directories alike,
/// nothing filtered, nothing sorted.
pub fn read_listing(target: &Path) -> Result<Listing, ListingError> {
    // `Path::exists` treats "cannot stat" as absent.
    if !target.exists() {
        log::debug!("Target {:?} does not exist", target);
        return Err(ListingError::NotFound);
    }

    let entries = fs::read_dir(target)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;

    log::debug!("Read {} entries from {:?}", entries.len(), target);
    Ok(Listing { entries })
}
