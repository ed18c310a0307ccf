use std::fmt;

use crate::error::SourceError;

/// Programmable pipeline stage a block of source belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Lower-case name, as written after `#shader` in a tagged file.
    pub const fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-stage source text split out of a tagged shader file.
///
/// Every line kept in a stage is terminated by `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    pub(crate) fn stage_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }

    /// Fails with [`SourceError::MissingStage`] for the first stage that holds
    /// nothing but whitespace.
    pub fn require_complete(&self) -> Result<(), SourceError> {
        match ShaderStage::ALL
            .into_iter()
            .find(|&s| self.stage(s).trim().is_empty())
        {
            Some(stage) => Err(SourceError::MissingStage(stage)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn complete_program_passes() {
        let p = ShaderProgramSource { vertex: "v\n".into(), fragment: "f\n".into() };
        assert!(p.require_complete().is_ok());
    }

    #[test]
    fn blank_vertex_is_reported_first() {
        let p = ShaderProgramSource { vertex: "\n  \n".into(), fragment: String::new() };
        assert!(matches!(
            p.require_complete(),
            Err(SourceError::MissingStage(ShaderStage::Vertex))
        ));
    }

    #[test]
    fn blank_fragment_is_reported() {
        let p = ShaderProgramSource { vertex: "v\n".into(), fragment: "\n".into() };
        assert!(matches!(
            p.require_complete(),
            Err(SourceError::MissingStage(ShaderStage::Fragment))
        ));
    }
}
