use std::path::Path;

use crate::error::SourceError;
use crate::source::{ShaderProgramSource, ShaderStage};

const TAG: &str = "#shader";

// ── Parser ────────────────────────────────────────────────────────────────

/// Line-oriented splitter for tagged shader files.
///
/// Feed lines in file order with [`Parser::line`], then take the result with
/// [`Parser::finish`].
#[derive(Debug, Default)]
pub struct Parser {
    current: Option<ShaderStage>,
    out: ShaderProgramSource,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage that untagged lines are currently appended to.
    pub fn current_stage(&self) -> Option<ShaderStage> {
        self.current
    }

    /// Consumes one line. `line` must not contain its terminator.
    pub fn line(&mut self, line: &str) {
        if line.contains(TAG) {
            // "vertex" wins if a tag names both stages.
            // A tag naming neither keeps the current stage.
            if line.contains(ShaderStage::Vertex.name()) {
                self.current = Some(ShaderStage::Vertex);
            } else if line.contains(ShaderStage::Fragment.name()) {
                self.current = Some(ShaderStage::Fragment);
            }
            return;
        }

        // Text before the first tag has no stage to go to.
        let Some(stage) = self.current else { return };
        let buf = self.out.stage_mut(stage);
        buf.push_str(line);
        buf.push('\n');
    }

    pub fn finish(self) -> ShaderProgramSource {
        self.out
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Splits a tagged shader source into its stages.
///
/// Accepts `\n` and `\r\n` line endings.
pub fn parse_str(src: &str) -> ShaderProgramSource {
    let mut parser = Parser::new();
    for line in src.lines() {
        parser.line(line);
    }
    parser.finish()
}

/// Reads and splits the tagged shader file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<ShaderProgramSource, SourceError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_str(&src))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_stages() {
        let p = parse_str("#shader vertex\na\nb\n#shader fragment\nc\n");
        assert_eq!(p.vertex, "a\nb\n");
        assert_eq!(p.fragment, "c\n");
    }

    #[test]
    fn fragment_first_is_fine() {
        let p = parse_str("#shader fragment\nf\n#shader vertex\nv\n");
        assert_eq!(p.vertex, "v\n");
        assert_eq!(p.fragment, "f\n");
    }

    #[test]
    fn last_line_without_newline_gets_one() {
        let p = parse_str("#shader vertex\nlast");
        assert_eq!(p.vertex, "last\n");
    }

    #[test]
    fn blank_lines_are_kept() {
        let p = parse_str("#shader vertex\n\nx\n\n");
        assert_eq!(p.vertex, "\nx\n\n");
    }

    #[test]
    fn crlf_line_endings() {
        let p = parse_str("#shader vertex\r\nv\r\n#shader fragment\r\nf\r\n");
        assert_eq!(p.vertex, "v\n");
        assert_eq!(p.fragment, "f\n");
    }

    #[test]
    fn lines_before_first_tag_are_dropped() {
        let p = parse_str("// header\nstray\n#shader vertex\nv\n");
        assert_eq!(p.vertex, "v\n");
        assert!(p.fragment.is_empty());
    }

    #[test]
    fn tag_is_matched_anywhere_in_the_line() {
        let p = parse_str("  // #shader   fragment  \nf\n");
        assert_eq!(p.fragment, "f\n");
    }

    #[test]
    fn unknown_tag_keeps_current_stage_and_is_dropped() {
        let p = parse_str("#shader vertex\na\n#shader geometry\nb\n");
        assert_eq!(p.vertex, "a\nb\n");
        assert!(p.fragment.is_empty());
    }

    #[test]
    fn vertex_wins_when_tag_names_both() {
        let p = parse_str("#shader fragment-after-vertex\nx\n");
        assert_eq!(p.vertex, "x\n");
    }

    #[test]
    fn repeated_stage_accumulates_in_order() {
        let p = parse_str("#shader vertex\n1\n#shader fragment\n2\n#shader vertex\n3\n");
        assert_eq!(p.vertex, "1\n3\n");
        assert_eq!(p.fragment, "2\n");
    }

    #[test]
    fn empty_input() {
        let p = parse_str("");
        assert_eq!(p, ShaderProgramSource::default());
        assert!(p.require_complete().is_err());
    }

    #[test]
    fn current_stage_tracks_tags() {
        let mut parser = Parser::new();
        assert_eq!(parser.current_stage(), None);
        parser.line("#shader fragment");
        assert_eq!(parser.current_stage(), Some(ShaderStage::Fragment));
        parser.line("#shader vertex");
        assert_eq!(parser.current_stage(), Some(ShaderStage::Vertex));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load("/definitely/not/here.shader").unwrap_err();
        match &err {
            SourceError::Io { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.shader"))
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("/definitely/not/here.shader"));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("prism-shader-{}.shader", std::process::id()));
        std::fs::write(&path, "#shader vertex\nv\n#shader fragment\nf\n").unwrap();
        let p = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(p.vertex, "v\n");
        assert_eq!(p.fragment, "f\n");
    }
}
