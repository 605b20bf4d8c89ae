//! JSON Lines (JSONL) I/O for pair streams.
//!
//! Files are newline-delimited JSON; each line holds one serialized [`Pair`]
//! (`{"key": …, "value": …}`). Empty and whitespace-only lines are skipped on
//! read.

use crate::pair::Pair;
use crate::stream::{MapStream, from_pairs};
use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{File, create_dir_all};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a JSONL file into a typed `Vec<Pair<K, V>>`.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or if any line
/// fails to parse into a pair. Errors include contextual information (line
/// number).
pub fn read_jsonl_pairs<K, V>(path: impl AsRef<Path>) -> Result<Vec<Pair<K, V>>>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = BufReader::new(f);
    let mut out = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let p: Pair<K, V> = serde_json::from_str(&line).with_context(|| {
            format!("parse JSONL line {} in {}: {}", i + 1, path.display(), line)
        })?;
        out.push(p);
    }
    Ok(out)
}

/// Read a JSONL file straight into a [`MapStream`].
pub fn read_jsonl_stream<K, V>(
    path: impl AsRef<Path>,
) -> Result<MapStream<impl Iterator<Item = Pair<K, V>>>>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    Ok(from_pairs(read_jsonl_pairs(path)?))
}

/// Write pairs as a JSONL file (one JSON document per line, followed by
/// `\n`). Parent directories are created as needed.
///
/// # Returns
/// The number of pairs written (`pairs.len()`).
///
/// # Errors
/// Returns an error if the file/dirs cannot be created or any pair fails to
/// serialize/flush.
pub fn write_jsonl_pairs<K, V>(path: impl AsRef<Path>, pairs: &[Pair<K, V>]) -> Result<usize>
where
    K: Serialize,
    V: Serialize,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for (i, p) in pairs.iter().enumerate() {
        serde_json::to_writer(&mut w, p)
            .with_context(|| format!("serialize pair #{} to {}", i, path.display()))?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(pairs.len())
}

impl<K, V, I> MapStream<I>
where
    K: Serialize,
    V: Serialize,
    I: Iterator<Item = Pair<K, V>>,
{
    /// Drain the stream to a JSONL file.
    ///
    /// # Returns
    /// The number of pairs written.
    pub fn write_jsonl(self, path: impl AsRef<Path>) -> Result<usize> {
        let pairs: Vec<Pair<K, V>> = self.iter.collect();
        write_jsonl_pairs(path, &pairs)
    }
}
