use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::GeneratedFile;
use crate::error::MaterializeError;

/// Fail if `output_dir` exists. Output directories are never merged into.
pub fn ensure_absent(output_dir: &Path) -> Result<(), MaterializeError> {
    if output_dir.exists() {
        return Err(MaterializeError::OutputExists(output_dir.to_path_buf()));
    }
    Ok(())
}

/// Create `output_dir`, seed it from `starter` when given, then write `files`.
///
/// Generated files replace starter files at the same path. A failure part way
/// through leaves whatever was already written in place.
pub fn materialize(
    output_dir: &Path,
    files: &[GeneratedFile],
    starter: Option<&Path>,
) -> Result<(), MaterializeError> {
    ensure_absent(output_dir)?;

    match starter {
        Some(starter) => copy_tree(starter, output_dir)?,
        None => create_dir_all(output_dir)?,
    }

    write_files(output_dir, files)
}

/// Write generated files under `base`, creating parent directories as needed.
pub fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<(), MaterializeError> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        fs::write(&path, &file.content).map_err(|source| MaterializeError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
    }
    Ok(())
}

/// Recursively copy `from` to `to`, skipping the `.git` directory.
///
/// Symlinks are followed: a linked file or directory is copied as its
/// target's content. Link cycles surface as [`MaterializeError::Walk`].
fn copy_tree(from: &Path, to: &Path) -> Result<(), MaterializeError> {
    let walker = WalkDir::new(from)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ".git");

    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|source| MaterializeError::Io {
                path: dest.clone(),
                source,
            })?;
        }
    }
    debug!("copied starter tree {} to {}", from.display(), to.display());
    Ok(())
}

fn create_dir_all(path: &Path) -> Result<(), MaterializeError> {
    fs::create_dir_all(path).map_err(|source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
