use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the pipeline. None of these are recoverable: the caller is expected
/// to report the error and abort.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed input{}: {reason}", line_suffix(.line))]
    MalformedInput { line: Option<u64>, reason: String },

    #[error("Input contains no observations")]
    EmptyInput,

    /// `path` is `None` when the failing reader isn't backed by a file
    #[error("Failed to read {}: {source}", describe(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write chart {path:?}: {message}")]
    FileWrite { path: PathBuf, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("file {:?}", path),
        None => "input".to_owned(),
    }
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(line: Option<u64>, reason: S) -> Error {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        let line = e.position().map(|pos| pos.line());
        let reason = e.to_string();

        match e.into_kind() {
            csv::ErrorKind::Io(source) => Error::Io { path: None, source },
            _ => Error::malformed(line, reason),
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn malformed_input_mentions_line() {
        let e = Error::malformed(Some(7), "bad date");
        assert_eq!(e.to_string(), "Malformed input at line 7: bad date");

        let e = Error::malformed(None, "bad date");
        assert_eq!(e.to_string(), "Malformed input: bad date");
    }

    #[test]
    fn csv_io_failure_stays_an_io_error() {
        let e = csv::Error::from(io::Error::new(io::ErrorKind::Other, "disk gone"));

        match Error::from(e) {
            Error::Io { path: None, source } => assert_eq!(source.to_string(), "disk gone"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn io_error_names_the_file() {
        let e = Error::Io {
            path: Some("views.csv".into()),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "Failed to read file \"views.csv\": gone");
    }
}
