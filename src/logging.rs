//! Diagnostic output of the search engine

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Where log messages go
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogStrategy {
  /// Drop all messages
  #[default]
  Discard,
  /// Print messages to stderr
  StdErr,
  /// Append messages to a file, creating it if necessary
  File(PathBuf),
}

/// Sink for diagnostic messages. Failing to write a message never affects
/// the operation that produced it.
#[derive(Clone, Debug, Default)]
pub struct Logger(LogStrategy);
impl Logger {
  /// Log according to the given strategy
  pub fn new(strat: LogStrategy) -> Self { Self(strat) }
  /// Whether messages are dropped anyway. Callers can skip formatting
  /// expensive messages if this is true.
  pub fn is_discard(&self) -> bool { self.0 == LogStrategy::Discard }
  /// Emit a message
  pub fn log(&self, msg: String) {
    match &self.0 {
      LogStrategy::Discard => (),
      LogStrategy::StdErr => eprintln!("{msg}"),
      LogStrategy::File(path) => {
        let file = OpenOptions::new().create(true).append(true).open(path);
        if let Ok(mut file) = file {
          let _ = writeln!(file, "{msg}");
        }
      },
    }
  }
  /// The configured strategy
  pub fn strat(&self) -> LogStrategy { self.0.clone() }
}
