use std::path::PathBuf;

use thiserror::Error;

/// Maximum number of bytes of a driver info log kept in an error.
pub const MAX_INFO_LOG_LEN: usize = 512;

/// Failures while creating GPU resources.
///
/// None of these are recoverable in the demo; they are reported through the
/// fatal error path by the caller.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },

    #[error("refusing to create an empty {what}")]
    Empty { what: &'static str },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader source {} is not valid UTF-8", path.display())]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to compile shader {}: {log}", path.display())]
    Compile { path: PathBuf, log: String },

    #[error("failed to link shader program from {} and {}: {log}", vertex.display(), fragment.display())]
    Link {
        vertex: PathBuf,
        fragment: PathBuf,
        log: String,
    },
}

impl ResourceError {
    pub(crate) fn create(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Create {
            what,
            reason: reason.into(),
        }
    }
}

/// Trims a driver info log to [`MAX_INFO_LOG_LEN`] bytes on a char boundary.
pub(crate) fn truncate_info_log(mut log: String) -> String {
    let trimmed_len = log.trim_end().len();
    log.truncate(trimmed_len);

    if log.len() > MAX_INFO_LOG_LEN {
        let mut end = MAX_INFO_LOG_LEN;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }

    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_logs_are_kept_without_trailing_newlines() {
        let log = truncate_info_log("0:1(1): error: syntax error\n\n".to_string());
        assert_eq!(log, "0:1(1): error: syntax error");
    }

    #[test]
    fn long_logs_are_capped() {
        let log = truncate_info_log("e".repeat(2000));
        assert_eq!(log.len(), MAX_INFO_LOG_LEN);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut log = "a".repeat(MAX_INFO_LOG_LEN - 1);
        log.push('ü');
        log.push_str("tail");
        let log = truncate_info_log(log);
        assert_eq!(log.len(), MAX_INFO_LOG_LEN - 1);
        assert!(log.chars().all(|c| c == 'a'));
    }

    #[test]
    fn compile_error_names_the_file() {
        let err = ResourceError::Compile {
            path: PathBuf::from("vertex.glsl"),
            log: "bad token".to_string(),
        };
        assert_eq!(err.to_string(), "failed to compile shader vertex.glsl: bad token");
    }

    #[test]
    fn link_error_names_both_files() {
        let err = ResourceError::Link {
            vertex: PathBuf::from("vertex.glsl"),
            fragment: PathBuf::from("fragment.glsl"),
            log: "mismatch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to link shader program from vertex.glsl and fragment.glsl: mismatch"
        );
    }
}
