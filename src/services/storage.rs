use crate::domain::{ContactError, ContactRecord};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Missing file means "no contacts yet". A file that exists but does not parse
/// is an error; the caller must not overwrite it.
pub fn load_records(path: &Path) -> Result<Vec<ContactRecord>, ContactError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "contacts file absent, starting empty");
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ContactError::io("read", path, e))?;
    let records: Vec<ContactRecord> =
        serde_json::from_str(&raw).map_err(|source| ContactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded contacts");
    Ok(records)
}

/// Overwrites `path` with the full record list.
///
/// Writes and syncs a sibling `.tmp` file, then renames it into place.
pub fn save_records(path: &Path, records: &[ContactRecord]) -> Result<(), ContactError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ContactError::io("create", parent, e))?;
    }
    let body = to_pretty_json(records).map_err(|e| ContactError::io("encode", path, e.into()))?;
    let tmp = tmp_path(path);
    write_synced(&tmp, &body).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        ContactError::io("write", &tmp, e)
    })?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(ContactError::io("replace", path, e));
    }
    tracing::debug!(path = %path.display(), count = records.len(), "saved contacts");
    Ok(())
}

fn write_synced(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(body)?;
    file.sync_all()
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    value.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "contacts.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
