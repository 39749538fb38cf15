//! Walk the device tree and gather the contents of all modalias files

use std::path::Path;
use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::config::CollectorConfiguration;
use crate::error::CollectError;
use crate::record::ModaliasSet;

/// Find and read all modalias files according to the configuration.
///
/// Only an inaccessible root is an error. Parts of the tree (or individual
/// files) that can't be read are skipped.
#[tracing::instrument(skip_all, fields(root = ?config.root))]
pub fn collect_modaliases(config: &CollectorConfiguration) -> Result<ModaliasSet, CollectError> {
    let paths = find_modalias_files(config)?;
    Ok(read_modalias_files(paths.as_slice()))
}

/// Recursively find all files with the configured name below the root.
///
/// Symlinks are not followed, so every device is only seen once even though
/// sysfs links to it from several places.
pub fn find_modalias_files(config: &CollectorConfiguration) -> Result<Vec<PathBuf>, CollectError> {
    // The walker reports a broken root like any other entry, check it up front
    // so it can be told apart from unreadable subdirectories.
    std::fs::read_dir(&config.root).map_err(|source| CollectError::RootInaccessible {
        path: config.root.clone(),
        source,
    })?;

    tracing::debug!("Walking device tree");
    let walker = WalkBuilder::new(&config.root)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_global(false)
        .git_ignore(false)
        .git_exclude(false)
        .follow_links(false)
        .same_file_system(config.same_file_system)
        .build();

    let mut found = vec![];
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_name() != config.file_name.as_os_str() {
                    continue;
                }
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    continue;
                }
                found.push(entry.into_path());
            }
            Err(err) => log_walk_error(&err),
        }
    }
    Ok(found)
}

/// Read all the given files into a set of records.
///
/// Files that vanished or can't be read are skipped. Each file is opened and
/// closed within a single read.
pub fn read_modalias_files<P: AsRef<Path>>(paths: &[P]) -> ModaliasSet {
    let mut records = ModaliasSet::new();
    let mut skipped = 0usize;
    for path in paths {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(contents) => records.extend_from_bytes(&contents),
            Err(err) => {
                skipped += 1;
                tracing::debug!(?path, %err, "Skipping unreadable modalias file");
            }
        }
    }
    tracing::debug!(
        files = paths.len(),
        skipped,
        records = records.len(),
        "Collected modaliases"
    );
    records
}

fn log_walk_error(err: &ignore::Error) {
    match err.io_error().map(std::io::Error::kind) {
        // Devices come and go while we walk
        Some(std::io::ErrorKind::NotFound) => {
            tracing::trace!(%err, "Entry vanished during walk");
        }
        Some(std::io::ErrorKind::PermissionDenied) => {
            tracing::debug!(%err, "Permission denied, skipping");
        }
        _ => tracing::debug!(%err, "Error while walking device tree, skipping"),
    }
}
