//! Parsing JavaScript/TypeScript sources with swc.

use crate::diagnostics::{OffsetRange, Position, Range};
use std::path::{Path, PathBuf};
use swc_common::{sync::Lrc, BytePos, FileName, SourceMap, Span};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::parser::{parse_file_as_module, EsSyntax, Syntax, TsSyntax};
use thiserror::Error;

/// Failure to obtain a syntax tree for a source file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Syntax { path: PathBuf, message: String },
}

/// Dialect used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    /// JavaScript with JSX (.js, .jsx, .mjs, .cjs)
    JavaScript,
    /// TypeScript without JSX (.ts, .mts, .cts)
    TypeScript,
    /// TypeScript with JSX (.tsx)
    Tsx,
}

impl SourceLanguage {
    /// Detect language from a file path based on its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Self::JavaScript => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Self::TypeScript => Syntax::Typescript(TsSyntax {
                decorators: true,
                ..Default::default()
            }),
            Self::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            }),
        }
    }
}

/// Line index for a file (for position conversions)
/// Maps byte offsets to line/column positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    /// Convert a byte offset to a 0-based position
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));
        let column = offset - self.line_starts[line];
        Position::new(line as u32, column as u32)
    }
}

/// A parsed source file together with what is needed to map swc spans back
/// to the original text.
pub struct ParsedSource {
    pub language: SourceLanguage,
    pub module: Module,
    text: String,
    start_pos: BytePos,
    line_index: LineIndex,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("language", &self.language)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

impl ParsedSource {
    /// Byte offsets of a span within this file's text
    #[must_use]
    pub fn offset_range(&self, span: Span) -> OffsetRange {
        let to_offset = |pos: BytePos| pos.0.saturating_sub(self.start_pos.0) as usize;
        OffsetRange::new(to_offset(span.lo), to_offset(span.hi))
    }

    #[must_use]
    pub fn range(&self, span: Span) -> Range {
        let offsets = self.offset_range(span);
        Range::new(
            self.line_index.position(offsets.start),
            self.line_index.position(offsets.end),
        )
    }

    /// Source text covered by a span
    #[must_use]
    pub fn snippet(&self, span: Span) -> Option<&str> {
        let offsets = self.offset_range(span);
        self.text.get(offsets.start..offsets.end)
    }

    /// Unquoted value of a string literal at `span`.
    ///
    /// Escape sequences are left as written.
    #[must_use]
    pub fn string_literal(&self, span: Span) -> Option<&str> {
        let raw = self.snippet(span)?;
        ['\'', '"']
            .iter()
            .find_map(|quote| raw.strip_prefix(*quote)?.strip_suffix(*quote))
    }
}

/// Parse a source file as an ES module.
///
/// The language is chosen from the file extension; unknown extensions are
/// parsed as JavaScript with JSX. A leading byte order mark is dropped, and
/// offsets and positions are relative to the text after it.
#[tracing::instrument(skip(text), fields(path = %path.display(), size = text.len()))]
pub fn parse_source(path: &Path, text: &str) -> Result<ParsedSource, SourceError> {
    let language = SourceLanguage::from_path(path).unwrap_or(SourceLanguage::JavaScript);
    // swc drops the BOM from the source file, so spans never cover it
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let source_map: Lrc<SourceMap> = Lrc::default();
    let file = source_map.new_source_file(
        Lrc::new(FileName::Real(path.to_path_buf())),
        text.to_string(),
    );

    let mut recovered = Vec::new();
    let module = parse_file_as_module(
        &file,
        language.syntax(),
        EsVersion::latest(),
        None,
        &mut recovered,
    )
    .map_err(|err| SourceError::Syntax {
        path: path.to_path_buf(),
        message: format!("{:?}", err.kind()),
    })?;

    if !recovered.is_empty() {
        tracing::debug!(
            recovered = recovered.len(),
            "Parsed with recoverable syntax errors"
        );
    }

    Ok(ParsedSource {
        language,
        module,
        text: text.to_string(),
        start_pos: file.start_pos,
        line_index: LineIndex::new(text),
    })
}
