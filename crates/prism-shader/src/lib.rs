//! Parser for **tagged shader files**.
//!
//! A tagged shader file carries every stage of a program in one text file.
//! Each stage starts at a tag line:
//!
//! ```text
//! #shader vertex
//! ...vertex stage...
//!
//! #shader fragment
//! ...fragment stage...
//! ```
//!
//! This crate is intentionally dependency-free so it can be used by editors
//! and linters without pulling in any GPU code.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`source`] | `ShaderStage`, `ShaderProgramSource` |
//! | [`error`] | `SourceError` |
//! | [`parser`] | `parse_str`, `load` |
//!
//! # Quick start
//!
//! ```rust
//! use prism_shader::{parse_str, ShaderStage};
//!
//! let src = "#shader vertex\nvertex code\n#shader fragment\nfragment code\n";
//! let program = parse_str(src);
//! assert_eq!(program.stage(ShaderStage::Vertex), "vertex code\n");
//! assert_eq!(program.stage(ShaderStage::Fragment), "fragment code\n");
//! ```

pub mod error;
pub mod parser;
pub mod source;

pub use error::SourceError;
pub use parser::{load, parse_str};
pub use source::{ShaderProgramSource, ShaderStage};
