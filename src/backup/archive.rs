//! Archive creation and transfer
//!
//! The day's file is compressed into a single-entry zip next to the source
//! and then copied, byte for byte, into the file-server directory.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the zip produced for a backup file
///
/// The extension is swapped for `.zip` (`db.bak` -> `db.zip`). A file that
/// is already a `.zip` keeps its full name with `.zip` appended, so the
/// archive never overwrites its own source.
pub fn archive_name_for(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());

    let candidate = format!("{}.zip", stem);
    if candidate == file_name {
        format!("{}.zip", file_name)
    } else {
        candidate
    }
}

/// Compress `source` into a new zip at `archive`
///
/// The archive holds exactly one deflated entry named `entry_name`. An
/// existing file at `archive` is truncated.
pub fn compress_file(source: &Path, archive: &Path, entry_name: &str) -> io::Result<()> {
    let mut reader = BufReader::new(File::open(source)?);
    let writer = BufWriter::new(File::create(archive)?);

    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(true);

    zip.start_file(entry_name, options).map_err(zip_to_io)?;
    io::copy(&mut reader, &mut zip)?;

    let mut writer = zip.finish().map_err(zip_to_io)?;
    writer.flush()?;
    Ok(())
}

/// Copy `archive` into `destination_dir`, keeping its file name
///
/// Returns the path of the copy. The destination directory must exist.
pub fn transfer_archive(archive: &Path, destination_dir: &Path) -> io::Result<PathBuf> {
    if !destination_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "destination directory {} does not exist",
                destination_dir.display()
            ),
        ));
    }

    let file_name = archive.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("archive path {} has no file name", archive.display()),
        )
    })?;

    let destination = destination_dir.join(file_name);
    fs::copy(archive, &destination)?;
    Ok(destination)
}

fn zip_to_io(err: zip::result::ZipError) -> io::Error {
    match err {
        zip::result::ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
