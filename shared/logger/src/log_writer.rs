//! Log sinks: a background file writer and an in-memory capture.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Where a logger's records end up. Cloned loggers share the same sink.
#[derive(Clone, Debug)]
pub(crate) enum Sink {
    /// Records are handed to a dedicated writer thread.
    File(Arc<FileSink>),
    /// Records are appended synchronously to a shared buffer.
    Memory(Arc<Mutex<Vec<String>>>),
}

impl Sink {
    pub fn write(&self, message: LogMessage) {
        match self {
            Sink::File(file) => file.send(WriterCommand::Record(message)),
            Sink::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.line());
                }
            }
        }
    }

    /// Blocks until every record written so far is on disk
    pub fn flush(&self) {
        if let Sink::File(file) = self {
            file.flush();
        }
    }
}

/// Messages understood by the writer thread
#[derive(Debug)]
enum WriterCommand {
    Record(LogMessage),
    /// Acknowledged once all earlier records are written
    Flush(Sender<()>),
}

/// Owner of the writer thread.
///
/// Dropping the last handle closes the channel and joins the thread, so
/// queued records are written before the drop returns.
#[derive(Debug)]
pub(crate) struct FileSink {
    sender: Option<Sender<WriterCommand>>,
    writer: Option<JoinHandle<()>>,
}

impl FileSink {
    fn send(&self, command: WriterCommand) {
        if let Some(sender) = &self.sender {
            // Fails only if the writer thread panicked.
            let _ = sender.send(command);
        }
    }

    fn flush(&self) {
        let (ack, done) = channel();
        self.send(WriterCommand::Flush(ack));
        // An error means the writer is gone; nothing is left to wait for.
        let _ = done.recv();
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                eprintln!("Log writer thread panicked");
            }
        }
    }
}

/// Appends records to a file, flushing after each one.
struct FileWriter {
    file: File,
}

impl FileWriter {
    fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_message(&mut self, message: &LogMessage) {
        let mut line = message.line();
        line.push('\n');
        if let Err(e) = self.file.write_all(line.as_bytes()) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    fn run(mut self, receiver: Receiver<WriterCommand>) {
        for command in receiver {
            match command {
                WriterCommand::Record(message) => self.write_message(&message),
                WriterCommand::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
    }
}

/// Opens `log_path` and spawns the writer thread feeding from the returned sink.
///
/// The file is opened before the thread starts so that a bad path is reported
/// to the caller instead of being lost on the writer thread.
pub(crate) fn spawn_file_sink(log_path: &Path) -> Result<Sink> {
    let writer = FileWriter::open(log_path)?;
    let (sender, receiver) = channel();
    let handle = std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))?;
    Ok(Sink::File(Arc::new(FileSink {
        sender: Some(sender),
        writer: Some(handle),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("filmstrip.log");

        assert!(FileWriter::open(&log_path).is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("missing").join("filmstrip.log");

        assert!(spawn_file_sink(&log_path).is_err());
    }

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("filmstrip.log");

        let sink = spawn_file_sink(&log_path).unwrap();
        sink.write(LogMessage::new(LogLevel::Info, None, "first"));
        sink.write(LogMessage::new(LogLevel::Warn, Some("Store"), "second"));
        drop(sink);

        let content = fs::read_to_string(log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO: first"));
        assert!(lines[1].ends_with("WARN [Store]: second"));
    }

    #[test]
    fn test_flush_waits_for_queued_records() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("filmstrip.log");

        let sink = spawn_file_sink(&log_path).unwrap();
        for i in 0..100 {
            sink.write(LogMessage::new(LogLevel::Info, None, &format!("record {}", i)));
        }
        sink.flush();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 100);
        assert!(content.ends_with("INFO: record 99\n"));
    }

    #[test]
    fn test_memory_sink_is_synchronous() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Sink::Memory(Arc::clone(&lines));

        sink.write(LogMessage::new(LogLevel::Debug, None, "captured"));

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("DEBUG: captured"));
    }
}
