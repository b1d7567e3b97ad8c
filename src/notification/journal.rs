//! Delivery journal - local JSONL record of sent notifications

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const MAX_RECORDS: usize = 200;
const KEEP_AFTER_CLEANUP: usize = 100;
const CLEANUP_CHECK_INTERVAL: usize = 10;
const SUMMARY_MAX_LEN: usize = 100;

/// One delivered notification (JSONL line)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRecord {
    /// ISO8601 timestamp
    pub ts: DateTime<Utc>,
    /// Channel the message went through
    pub channel: String,
    /// Message summary, truncated
    pub summary: String,
}

impl JournalRecord {
    pub fn new(channel: impl Into<String>, message: &str) -> Self {
        Self {
            ts: Utc::now(),
            channel: channel.into(),
            summary: truncate_summary(message, SUMMARY_MAX_LEN),
        }
    }
}

/// Append-only JSONL journal with a size cap.
pub struct Journal {
    path: PathBuf,
    write_count: AtomicUsize,
}

impl Journal {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_count: AtomicUsize::new(0),
        }
    }

    /// Default location under the user config dir.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("notify-hub")
            .join("journal.jsonl")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Append a record (with an exclusive file lock).
    pub fn append(&self, record: &JournalRecord) -> Result<()> {
        use fs2::FileExt;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;
        let mut file = file;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        file.unlock()?;

        self.maybe_cleanup();
        Ok(())
    }

    /// Most recent `limit` records, oldest first. Unparsable lines are
    /// skipped with a warning.
    pub fn recent(&self, limit: usize) -> Result<Vec<JournalRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<JournalRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(error = %e, "Skipping malformed journal line"),
            }
        }

        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }

    /// Every CLEANUP_CHECK_INTERVAL writes, trim the file back down if it
    /// grew past MAX_RECORDS.
    fn maybe_cleanup(&self) {
        let count = self.write_count.fetch_add(1, Ordering::SeqCst) + 1;
        if count % CLEANUP_CHECK_INTERVAL != 0 {
            return;
        }
        if let Err(e) = self.cleanup() {
            warn!(error = %e, "Journal cleanup failed");
        }
    }

    fn cleanup(&self) -> Result<()> {
        use fs2::FileExt;

        let file = File::open(&self.path)?;

        // Exclusive lock held across read and rewrite, so a concurrent
        // append cannot land between them and get dropped.
        file.lock_exclusive()?;

        let reader = BufReader::new(&file);
        let records: Vec<JournalRecord> = reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect();

        if records.len() <= MAX_RECORDS {
            file.unlock()?;
            return Ok(());
        }

        let start = records.len().saturating_sub(KEEP_AFTER_CLEANUP);
        let keep = &records[start..];

        // Write the survivors to a temp file, then swap it in atomically
        // so a crash mid-rewrite cannot truncate the journal.
        let temp_path = self.path.with_extension("tmp");
        {
            let mut temp_file = File::create(&temp_path)?;
            for record in keep {
                writeln!(temp_file, "{}", serde_json::to_string(record)?)?;
            }
        }
        fs::rename(&temp_path, &self.path)?;

        file.unlock()?;
        debug!(
            kept = keep.len(),
            dropped = records.len() - keep.len(),
            "Trimmed notification journal"
        );
        Ok(())
    }
}

/// Truncate to at most `max_len` bytes, marking the cut with "..."
fn truncate_summary(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let cut = s
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i <= max_len.saturating_sub(3))
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..cut])
    }
}
