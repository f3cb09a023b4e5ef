use anyhow::Result;
use std::{fs::File, io::Write, path::Path};

/// Extensions accepted for the data and description tables.
pub const TABLE_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// Check that `path` exists and has one of `extensions` (case-insensitive).
pub fn validate_input_file(path: &str, extensions: &[&str]) -> Result<()> {
    let p = Path::new(path);

    let ext = p
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some(e) if extensions.contains(&e) => {}
        _ => anyhow::bail!(
            "File must have one of the extensions [{}]: {}",
            extensions.join(", "),
            path
        ),
    }

    if !p.is_file() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

pub fn write_bytes_to_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(bytes)?;
    Ok(())
}
