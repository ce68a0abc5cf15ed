//! Append-only CSV sink for labelled sample records

use mot_core::{MotError, MotResult, SampleRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Append-only record log
///
/// Armed by [`enable`](Self::enable), disarmed by
/// [`disable`](Self::disable). While disarmed, [`record`](Self::record)
/// is a no-op; a write is never attempted without an open sink. The
/// file path is supplied by the caller; records are appended with no
/// header row.
pub struct CsvRecorder {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    session_id: Option<Uuid>,
    records_written: u64,
}

impl CsvRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvRecorder {
            path: path.into(),
            writer: None,
            session_id: None,
            records_written: 0,
        }
    }

    /// Open (or create) the append-only sink and arm the recorder
    ///
    /// Idempotent: enabling an armed recorder keeps the open sink.
    pub fn enable(&mut self) -> MotResult<()> {
        if self.writer.is_some() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| MotError::StoreUnavailable {
                reason: format!("{}: {}", self.path.display(), e),
            })?;

        let session_id = Uuid::new_v4();
        info!(session = %session_id, path = %self.path.display(), "Recording session armed");

        self.writer = Some(BufWriter::new(file));
        self.session_id = Some(session_id);
        self.records_written = 0;
        Ok(())
    }

    /// Flush and release the sink, disarming the recorder
    pub fn disable(&mut self) -> MotResult<()> {
        if let Some(mut writer) = self.writer.take() {
            let session = self.session_id.take();
            writer.flush().map_err(|e| MotError::WriteFailure {
                reason: format!("flush on close: {}", e),
            })?;
            if let Some(session_id) = session {
                info!(
                    session = %session_id,
                    records = self.records_written,
                    "Recording session closed"
                );
            }
        }
        Ok(())
    }

    /// Append one record and flush; no-op while disarmed
    pub fn record(&mut self, record: &SampleRecord) -> MotResult<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        writer
            .write_all(record.csv_line().as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| MotError::WriteFailure {
                reason: e.to_string(),
            })?;

        self.records_written += 1;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mot_core::{ActivityLabel, FilteredSample, RawSample};

    fn temp_log_path() -> PathBuf {
        std::env::temp_dir().join(format!("mot-recorder-test-{}.csv", Uuid::new_v4()))
    }

    fn sample_record(timestamp_ms: i64, label: ActivityLabel) -> SampleRecord {
        SampleRecord::new(
            timestamp_ms,
            RawSample::new(0.5, -0.25, 9.8),
            FilteredSample::new(0.45, -0.2, 9.75),
            label,
        )
    }

    #[test]
    fn test_enable_then_disable_writes_nothing() {
        let path = temp_log_path();
        let mut recorder = CsvRecorder::new(&path);

        recorder.enable().unwrap();
        recorder.disable().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_record_is_noop_while_disarmed() {
        let path = temp_log_path();
        let mut recorder = CsvRecorder::new(&path);

        recorder.record(&sample_record(1, ActivityLabel::Idle)).unwrap();
        assert_eq!(recorder.records_written(), 0);
        assert!(!path.exists(), "disarmed recorder must not touch the sink");
    }

    #[test]
    fn test_three_records_three_lines() {
        let path = temp_log_path();
        let mut recorder = CsvRecorder::new(&path);

        recorder.enable().unwrap();
        recorder.record(&sample_record(100, ActivityLabel::Idle)).unwrap();
        recorder.record(&sample_record(120, ActivityLabel::Walking)).unwrap();
        recorder.record(&sample_record(140, ActivityLabel::Walking)).unwrap();
        recorder.disable().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("100,"));
        assert!(lines[0].ends_with(",Idle"));
        assert!(lines[1].ends_with(",Walking"));
        assert!(lines[2].starts_with("140,"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_reenabling_appends_to_existing_log() {
        let path = temp_log_path();
        let mut recorder = CsvRecorder::new(&path);

        recorder.enable().unwrap();
        recorder.record(&sample_record(1, ActivityLabel::Idle)).unwrap();
        recorder.disable().unwrap();

        recorder.enable().unwrap();
        recorder.record(&sample_record(2, ActivityLabel::ClimbingUp)).unwrap();
        recorder.disable().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_full_sink_reports_write_failure() {
        // /dev/full opens fine but fails every flush with ENOSPC.
        let mut recorder = CsvRecorder::new("/dev/full");
        recorder.enable().unwrap();

        let err = recorder
            .record(&sample_record(1, ActivityLabel::Idle))
            .unwrap_err();
        assert!(matches!(err, MotError::WriteFailure { .. }));
        assert_eq!(recorder.records_written(), 0);
    }

    #[test]
    fn test_unopenable_sink_reports_store_unavailable() {
        let path = std::env::temp_dir()
            .join(format!("mot-missing-{}", Uuid::new_v4()))
            .join("records.csv");
        let mut recorder = CsvRecorder::new(&path);

        let err = recorder.enable().unwrap_err();
        assert!(matches!(err, MotError::StoreUnavailable { .. }));
        assert!(!recorder.is_enabled());
    }
}
