//! Compiled pattern matchers with automatic optimization.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(char),

    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
}

/// Parsed modifier flags.
///
/// The supported set mirrors what the regex crate can express: `g` (find
/// all), `i` (case-insensitive), `m` (multi-line), `s` (dot matches
/// newline), `x` (ignore whitespace), `U` (swap greed). `u` is accepted for
/// compatibility; Unicode mode is always on. Anything else fails to parse,
/// as does a repeated flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Collect every non-overlapping match instead of just the first.
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub swap_greed: bool,
}

impl Flags {
    /// Parse a flag string such as `"gi"`.
    pub fn parse(flags: &str) -> Result<Self, CompileError> {
        let mut parsed = Flags::default();
        let mut seen = Vec::with_capacity(flags.len());
        for c in flags.chars() {
            if seen.contains(&c) {
                return Err(CompileError::DuplicateFlag(c));
            }
            seen.push(c);
            match c {
                'g' => parsed.global = true,
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                'x' => parsed.ignore_whitespace = true,
                'U' => parsed.swap_greed = true,
                'u' => {} // Unicode is always on
                other => return Err(CompileError::UnknownFlag(other)),
            }
        }
        Ok(parsed)
    }

    /// True when no flag changes match semantics (only `g`/`u` present).
    ///
    /// The literal fast paths are only sound for plain flags; anything else
    /// routes through the regex engine.
    fn is_plain(&self) -> bool {
        !self.case_insensitive
            && !self.multi_line
            && !self.dot_matches_new_line
            && !self.ignore_whitespace
            && !self.swap_greed
    }
}

/// A compiled pattern+flags pair, optimized for the pattern's structure.
///
/// All probing is driven by [`CompiledMatcher::find_from`] with the search
/// start passed explicitly on each call; the matcher carries no cursor
/// state between calls.
pub struct CompiledMatcher {
    engine: Engine,
    flags: Flags,
}

/// Match engine selected at compile time.
enum Engine {
    /// Single literal string (fastest).
    Literal(LiteralEngine),
    /// Multiple literal strings (Aho-Corasick).
    MultiLiteral(AhoCorasick),
    /// Full regex (most flexible).
    Regex(Regex),
}

/// Matcher for single literal strings using SIMD-optimized memchr.
struct LiteralEngine {
    pattern: String,
    finder: Finder<'static>,
}

impl CompiledMatcher {
    /// Compile a pattern+flags pair into an optimized matcher.
    ///
    /// Selects the engine based on pattern structure:
    /// - Plain literal -> memchr finder
    /// - Pure alternation of literals -> Aho-Corasick automaton
    /// - Everything else -> regex crate
    ///
    /// The literal tiers are bypassed whenever a flag alters match
    /// semantics.
    pub fn compile(pattern: &str, flags: &str) -> Result<Self, CompileError> {
        let flags = Flags::parse(flags)?;

        let engine = if flags.is_plain() && !pattern.is_empty() && is_literal(pattern) {
            Engine::Literal(LiteralEngine::new(pattern))
        } else if flags.is_plain()
            && let Some(literals) = extract_alternation_literals(pattern)
        {
            // Leftmost-first, so alternations resolve the same way the
            // regex engine resolves them.
            let automaton = AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostFirst)
                .build(&literals)
                .map_err(|e| CompileError::InvalidPattern(format!("aho-corasick error: {}", e)))?;
            Engine::MultiLiteral(automaton)
        } else {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(flags.case_insensitive)
                .multi_line(flags.multi_line)
                .dot_matches_new_line(flags.dot_matches_new_line)
                .ignore_whitespace(flags.ignore_whitespace)
                .swap_greed(flags.swap_greed)
                .build()?;
            Engine::Regex(regex)
        };

        Ok(Self { engine, flags })
    }

    /// Whether the flag set requests find-all semantics.
    pub fn is_global(&self) -> bool {
        self.flags.global
    }

    /// Find the first match at or after byte offset `at`.
    ///
    /// `at` must lie on a char boundary of `haystack`. Returns the match as
    /// a `(start, end)` byte range into the full haystack.
    pub fn find_from(&self, haystack: &str, at: usize) -> Option<(usize, usize)> {
        debug_assert!(haystack.is_char_boundary(at));
        match &self.engine {
            Engine::Literal(lit) => lit
                .finder
                .find(haystack.as_bytes().get(at..)?)
                .map(|pos| (at + pos, at + pos + lit.pattern.len())),
            Engine::MultiLiteral(ac) => ac
                .find(haystack.get(at..)?)
                .map(|m| (at + m.start(), at + m.end())),
            // find_at keeps anchor semantics relative to the full haystack,
            // which slicing would not.
            Engine::Regex(re) => re.find_at(haystack, at).map(|m| (m.start(), m.end())),
        }
    }
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
        )
    })
}

/// Extract literals from patterns like "foo|bar|baz".
///
/// Returns None if the pattern is not a pure alternation of non-empty
/// literals.
fn extract_alternation_literals(pattern: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = pattern.split('|').collect();
    if parts.len() < 2 {
        return None;
    }

    for part in &parts {
        if part.is_empty() || !is_literal(part) {
            return None;
        }
    }

    Some(parts.into_iter().map(String::from).collect())
}

impl LiteralEngine {
    /// Note: We leak the pattern string to get a 'static lifetime for
    /// Finder. This is acceptable since patterns are compiled once per
    /// extraction and are few.
    fn new(pattern: &str) -> Self {
        let pattern_owned = pattern.to_string();
        let pattern_static: &'static str = Box::leak(pattern_owned.clone().into_boxed_str());
        Self {
            pattern: pattern_owned,
            finder: Finder::new(pattern_static),
        }
    }
}

#[cfg(test)]
impl CompiledMatcher {
    /// Engine tier name, for tests asserting the selection logic.
    pub(crate) fn engine_kind(&self) -> &'static str {
        match self.engine {
            Engine::Literal(_) => "Literal",
            Engine::MultiLiteral(_) => "MultiLiteral",
            Engine::Regex(_) => "Regex",
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
