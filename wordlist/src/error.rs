use std::path::PathBuf;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized encoding in file: {}", .0.display())]
    UnrecognizedEncoding(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Path of the file involved in the failure, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::UnrecognizedEncoding(path) => {
                Some(path)
            }
            Self::Io(_) => None,
        }
    }

    /// Get helpful advice for fixing this error, if any.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Read { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    Some("Check the input path; it is resolved relative to the working directory")
                } else if source.kind() == std::io::ErrorKind::PermissionDenied {
                    Some("The input file exists but the current user cannot read it")
                } else {
                    None
                }
            }
            Self::Write { .. } => Some(
                "The output file is always created in the working directory; make sure it is writable",
            ),
            Self::UnrecognizedEncoding(_) => Some(
                "Input must be UTF-8, or start with a UTF-8, UTF-16 LE or UTF-16 BE byte order mark",
            ),
            Self::Io(_) => None,
        }
    }
}
