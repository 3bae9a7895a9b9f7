//! Append-only JSONL event log.

use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use vivarium_data::{LiveEvent, StatsSample};

/// Writes one JSON object per line to `<dir>/live.jsonl`.
///
/// The disabled variant (`new_dummy`) swallows events, keeping tests and
/// quiet runs free of filesystem traffic.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: String,
}

impl HistoryLogger {
    pub fn new_at(dir: &str) -> Result<Self> {
        if !std::path::Path::new(dir).exists() {
            std::fs::create_dir_all(dir)?;
        }
        let file_path = format!("{}/live.jsonl", dir);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_string(),
        })
    }

    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: String::new(),
        }
    }

    /// Logger over an already-open file handle. Read-back helpers are
    /// unavailable without a log directory.
    pub fn with_file(file: File) -> Self {
        Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: String::new(),
        }
    }

    pub fn log_event(&mut self, event: &LiveEvent) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{}", json)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Reads back every `Snapshot` event logged so far.
    pub fn snapshots(&self) -> Result<Vec<(u64, StatsSample)>> {
        if self.live_file.is_none() {
            return Ok(vec![]);
        }
        let file_path = format!("{}/live.jsonl", self.log_dir);
        let file = match File::open(file_path) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        let mut snapshots = Vec::new();
        for line in reader.lines().map_while(|l| l.ok()) {
            if let Ok(LiveEvent::Snapshot { tick, stats, .. }) =
                serde_json::from_str::<LiveEvent>(&line)
            {
                snapshots.push((tick, stats));
            }
        }
        Ok(snapshots)
    }
}

/// RFC 3339 wall-clock timestamp for logged events.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
