use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Path the backup ends up at: `dest`, or `dest` with a `.zip`
    /// extension when compressing.
    pub fn target_path(dest: &Path, compress: bool) -> PathBuf {
        if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        }
    }

    /// Copy the applications table to `dest`, or write it into a `.zip`
    /// archive next to `dest`. Returns the path of the final backup file.
    ///
    /// Overwrite confirmation is the caller's business.
    pub fn backup(table: &Path, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check table exists
        if !table.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Applications table not found: {}", table.display()),
            )
            .into());
        }

        // 2️⃣ Never write over the table itself
        let target = Self::target_path(dest, compress);
        if same_file(table, &target)? {
            return Err(AppError::Other(format!(
                "Backup destination is the applications table itself: {}",
                target.display()
            )));
        }

        // 3️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_backup(table, &target)?;
        } else {
            fs::copy(table, &target)?;
        }

        Ok(target)
    }
}

/// True when `dest` already exists and resolves to the same file as `table`.
fn same_file(table: &Path, dest: &Path) -> AppResult<bool> {
    if !dest.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(table)? == fs::canonicalize(dest)?)
}

/// Stream the table into a fresh .zip archive at `zip_path`.
fn compress_backup(table: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = table
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid table path: {}", table.display())))?;

    let mut src = fs::File::open(table)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
