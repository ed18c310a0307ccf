use std::fmt;
use std::path::PathBuf;

use crate::source::ShaderStage;

/// Failure to obtain a usable tagged shader source.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file parsed, but a stage has no code in it.
    MissingStage(ShaderStage),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => {
                write!(f, "failed to read shader file {}: {source}", path.display())
            }
            SourceError::MissingStage(stage) => {
                write!(f, "shader file has no `#shader {stage}` section with code in it")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::MissingStage(_) => None,
        }
    }
}
