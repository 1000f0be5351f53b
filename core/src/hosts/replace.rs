//! Atomic file replacement.
//!
//! New content is written to a temp file in the target's own directory, so
//! the final rename never crosses a filesystem. Readers therefore see either
//! the old file or the new one. The temp file is owned by a
//! [`NamedTempFile`] until the rename succeeds, and is removed on every other
//! path.

use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile, PersistError};
use tracing::{debug, error};

pub(crate) const TEMP_PREFIX: &str = "hosts.tmp";

/// Replaces `path` with `contents`.
pub(crate) fn replace_contents(path: &Path, contents: &str) -> io::Result<()> {
    replace_with(path, |file| file.write_all(contents.as_bytes()))
}

/// Replaces `path` with whatever `write` puts into the temp file.
///
/// Permission bits of an existing `path` are copied onto the replacement.
pub(crate) fn replace_with<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let permissions = existing_permissions(path)?;
    let dir = parent_dir(path);

    let mut temp = Builder::new().prefix(TEMP_PREFIX).tempfile_in(dir)?;
    debug!("Writing {}", temp.path().display());

    if let Err(err) = fill(&mut temp, permissions, write) {
        discard(temp);
        return Err(err);
    }

    match temp.persist(path) {
        Ok(_) => {
            sync_dir(dir);
            Ok(())
        }
        Err(PersistError { error, file }) => {
            discard(file);
            Err(error)
        }
    }
}

fn fill<F>(temp: &mut NamedTempFile, permissions: Option<Permissions>, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    write(temp.as_file_mut())?;
    temp.as_file_mut().flush()?;

    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }

    temp.as_file().sync_all()
}

fn existing_permissions(path: &Path) -> io::Result<Option<Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Deletes a temp file that will not be renamed into place.
fn discard(temp: NamedTempFile) {
    let temp_path = temp.path().to_path_buf();
    if let Err(err) = temp.close() {
        error!("Failed removing temp file {}: {err}", temp_path.display());
    }
}

/// Flushes the directory entry of the rename. Best effort.
fn sync_dir(dir: &Path) {
    if !cfg!(unix) {
        return;
    }
    if let Ok(handle) = File::open(dir) {
        let _ = handle.sync_all();
    }
}
