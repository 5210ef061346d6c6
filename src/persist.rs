//! Whole-file JSON persistence for the inventory collections.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

const INDENT: &[u8] = b"    ";

/// Load a collection from `path`, or return an empty one if the file does
/// not exist.
///
/// A file that exists but does not hold valid JSON is an error.
pub fn load<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = path.as_ref();

    if !path.exists() {
        log::debug!("{} does not exist, starting empty", path.display());
        return Ok(T::default());
    }

    let reader = BufReader::new(File::open(path)?);
    let data = serde_json::from_reader(reader)
        .map_err(|e| Error::DeserializeError(format!("{}: {}", path.display(), e)))?;

    log::debug!("Loaded {}", path.display());

    Ok(data)
}

/// Rewrite `path` in full with the JSON form of `data`.
///
/// The JSON is written to a sibling `.new` file first and then renamed over
/// the target, so a crash mid-write leaves the previous contents in place.
pub fn save<T>(path: impl AsRef<Path>, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let tmp_path = temp_path(path);

    let mut writer = BufWriter::new(File::create(&tmp_path)?);

    let mut ser =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;

    log::debug!("Saved {}", path.display());

    Ok(())
}

// `inventory.json` -> `inventory.json.new`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".new");
    path.with_file_name(name)
}
