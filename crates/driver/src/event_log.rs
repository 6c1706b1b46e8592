//! JSON-lines event log.
//!
//! Records are sent over an unbounded channel to a background task that owns
//! the file, so the game loop never waits on disk. One JSON object per line,
//! tagged by `"event"`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        ts: u64,
        width: u16,
        height: u16,
        seed: u32,
    },
    Action {
        ts: u64,
        seq: u64,
        action: &'static str,
        outcome: &'static str,
    },
    Lock {
        ts: u64,
        seq: u64,
        lines_cleared: usize,
    },
    GameOver {
        ts: u64,
        seq: u64,
        lines_cleared: u32,
        shapes_locked: u32,
    },
    End {
        ts: u64,
        reason: &'static str,
        actions: u64,
    },
}

/// Handle to the background writer.
pub struct EventLog {
    tx: mpsc::UnboundedSender<LogRecord>,
    task: JoinHandle<()>,
}

impl EventLog {
    /// Start a writer appending to `path`. Must be called inside a tokio runtime.
    ///
    /// If the file cannot be opened the failure is reported on stderr and
    /// records are dropped.
    pub fn open(path: impl Into<String>) -> Self {
        let path = path.into();
        let (tx, mut rx) = mpsc::unbounded_channel::<LogRecord>();

        let task = tokio::spawn(async move {
            let mut file = match OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
            {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("[EventLog] cannot open {}: {}", path, e);
                    while rx.recv().await.is_some() {}
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(record) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &record).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if let Err(e) = file.write_all(&buf).await {
                    eprintln!("[EventLog] write to {} failed: {}", path, e);
                    break;
                }
            }

            let _ = file.flush().await;
        });

        Self { tx, task }
    }

    pub fn record(&self, record: LogRecord) {
        let _ = self.tx.send(record);
    }

    /// Flush pending records and wait for the writer to finish.
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_tagged_snake_case() {
        let line = serde_json::to_string(&LogRecord::Lock {
            ts: 1,
            seq: 9,
            lines_cleared: 2,
        })
        .unwrap();
        assert_eq!(line, r#"{"event":"lock","ts":1,"seq":9,"lines_cleared":2}"#);

        let line = serde_json::to_string(&LogRecord::GameOver {
            ts: 1,
            seq: 3,
            lines_cleared: 0,
            shapes_locked: 5,
        })
        .unwrap();
        assert!(line.starts_with(r#"{"event":"game_over""#));
    }

    #[tokio::test]
    async fn writes_one_line_per_record() {
        let path = std::env::temp_dir().join(format!(
            "blockfall-event-log-{}-{}.jsonl",
            std::process::id(),
            now_ms()
        ));
        let path_str = path.to_string_lossy().to_string();

        let log = EventLog::open(path_str.clone());
        log.record(LogRecord::Start {
            ts: 0,
            width: 10,
            height: 20,
            seed: 4,
        });
        log.record(LogRecord::Action {
            ts: 0,
            seq: 1,
            action: "moveLeft",
            outcome: "moved",
        });
        log.close().await;

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "start");
        assert_eq!(lines[0]["seed"], 4);
        assert_eq!(lines[1]["action"], "moveLeft");

        let _ = tokio::fs::remove_file(&path).await;
    }
}
