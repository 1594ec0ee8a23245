//! Rolling Logger
//!
//! File logger for desktop and CLI applications:
//! - writes formatted `tracing` events to `<app>.log` in a log directory
//! - rolls the file over once it passes a size cap, keeping a fixed number of old files
//! - keeps the most recent lines in a circular buffer for in-app display
//! - bridges `log` records, so library crates can keep using the `log` macros

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub log_dir: PathBuf,
    pub app_name: String,
    /// Roll the active file over once it grows past this many bytes
    pub max_bytes: u64,
    /// Number of rolled files kept next to the active one
    pub max_files: usize,
    /// Lines held in the in-memory buffer
    pub buffer_lines: usize,
    pub level: Level,
}

impl LoggerOptions {
    pub fn new(log_dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            log_dir: log_dir.into(),
            app_name: app_name.to_string(),
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
            level: Level::INFO,
        }
    }
}

/// One line captured in the circular buffer
#[derive(Debug, Clone)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub text: String,
}

struct RollingState {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    recent: VecDeque<LogLine>,
    buffer_lines: usize,
}

impl RollingState {
    fn open(options: &LoggerOptions) -> io::Result<Self> {
        fs::create_dir_all(&options.log_dir)?;
        let path = options.log_dir.join(format!("{}.log", options.app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            file,
            written,
            max_bytes: options.max_bytes,
            max_files: options.max_files,
            recent: VecDeque::with_capacity(options.buffer_lines),
            buffer_lines: options.buffer_lines,
        })
    }

    fn write_record(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll_over()?;
        }

        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(buf.len())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.buffer_lines == 0 {
            return;
        }
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            if self.recent.len() == self.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(LogLine {
                at: Local::now(),
                text: line.to_string(),
            });
        }
    }

    /// app.log -> app.log.1 -> app.log.2 ... oldest beyond `max_files` is removed
    fn roll_over(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = rolled_path(&self.path, self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = rolled_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, rolled_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, rolled_path(&self.path, 1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn rolled_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

/// Shared handle to the rolling file; cheap to clone, one per formatted event
#[derive(Clone)]
pub struct RollingFileWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingFileWriter {
    pub fn new(options: &LoggerOptions) -> io::Result<Self> {
        Ok(Self {
            state: Arc::new(Mutex::new(RollingState::open(options)?)),
        })
    }

    /// Most recent `count` lines, oldest first
    pub fn recent(&self, count: usize) -> Vec<LogLine> {
        match self.state.lock() {
            Ok(state) => {
                let skip = state.recent.len().saturating_sub(count);
                state.recent.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().ok().map(|s| s.path.clone())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        state.write_record(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static LOGGER: OnceLock<RollingFileWriter> = OnceLock::new();

/// Initialize the global logger with default options
pub fn init_logger(log_dir: impl Into<PathBuf>, app_name: &str) -> Result<(), String> {
    init_logger_with(LoggerOptions::new(log_dir, app_name))
}

/// Initialize the global logger
///
/// Installs a `tracing` subscriber writing to the rolling file. The
/// subscriber also captures `log` records. Calling this twice is an error.
pub fn init_logger_with(options: LoggerOptions) -> Result<(), String> {
    let writer = RollingFileWriter::new(&options)
        .map_err(|e| format!("Failed to open log file in {}: {}", options.log_dir.display(), e))?;

    LOGGER
        .set(writer.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(options.level)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {}", e))?;

    log::info!("Logging to {}", options.log_dir.display());
    Ok(())
}

fn logger() -> Result<&'static RollingFileWriter, String> {
    LOGGER.get().ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(message: &str) -> Result<(), String> {
    logger()?;
    tracing::info!(target: "app", "{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), String> {
    logger()?;
    tracing::warn!(target: "app", "{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    logger()?;
    tracing::error!(target: "app", "{}", message);
    Ok(())
}

/// Most recent lines written by the global logger
pub fn recent_lines(count: usize) -> Vec<LogLine> {
    LOGGER.get().map(|w| w.recent(count)).unwrap_or_default()
}

/// Path of the active log file, once initialized
pub fn log_file_path() -> Option<PathBuf> {
    LOGGER.get().and_then(|w| w.path())
}
