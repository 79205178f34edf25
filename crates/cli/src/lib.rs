pub mod cache;
pub mod cli;
pub mod cmd_doc;
pub mod cmd_mode;
pub mod cmd_pattern;
pub mod color;
pub mod completions;
pub mod config;
pub mod error;
pub mod highlight;
pub mod model;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod sample;
pub mod store;

pub use cache::Extractor;
pub use cli::{Cli, Command, OutputFormat};
pub use color::ColorMode;
pub use error::{Error, ExitCode, Result};
pub use highlight::{HighlightedSegment, combine, segment};
pub use model::{Mode, PatternDef};
pub use pattern::{
    CompileError, CompiledMatcher, ExtractionResult, MatchRecord, extract_all, extract_matches,
    validate,
};
pub use store::Store;
