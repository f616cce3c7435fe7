use crate::keys::DiagnosisKeyRecord;
use crate::util::{create_with_backoff, open_with_backoff};
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load every diagnosis key from an NDJSON file. Blank lines are skipped;
/// a malformed or invalid record fails the load with its line number.
pub fn load_keys(path: &Path, buf_bytes: usize) -> Result<Vec<DiagnosisKeyRecord>> {
    let f = open_with_backoff(path, 16, 50).with_context(|| format!("open {}", path.display()))?;
    let rdr = BufReader::with_capacity(buf_bytes.max(8 * 1024), f);

    let mut keys = Vec::new();
    for (idx, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("read {}", path.display()))?;
        if line.trim().is_empty() { continue; }
        let key: DiagnosisKeyRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid diagnosis key", path.display(), idx + 1))?;
        keys.push(key);
    }
    tracing::info!("Loaded {} diagnosis keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Write keys as NDJSON, one object per line.
pub fn write_keys(path: &Path, keys: &[DiagnosisKeyRecord]) -> Result<()> {
    let f = create_with_backoff(path, 16, 50).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for key in keys {
        serde_json::to_writer(&mut w, key)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}
