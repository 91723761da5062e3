use crate::error::RecordError;
use crate::types::TextSpan;

// ─── RecordOrigin ───────────────────────────────────────────────────────────

/// Which constructor built a record. Only reported in diagnostics; the
/// storage shape is carried by [`Backing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    Unbacked,
    Dkvp,
    Nidx,
    Csv,
    CsvLite,
    Xtab,
}

// ─── Backing ────────────────────────────────────────────────────────────────

/// Raw text a record owns so that its fields can view into it uncopied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Backing {
    #[default]
    None,
    SingleLine(String),
    MultiLine(Vec<String>),
}

impl Backing {
    #[inline]
    pub fn line_count(&self) -> usize {
        match self {
            Backing::None => 0,
            Backing::SingleLine(_) => 1,
            Backing::MultiLine(lines) => lines.len(),
        }
    }

    #[inline]
    pub fn line(&self, i: usize) -> Option<&str> {
        match self {
            Backing::None => None,
            Backing::SingleLine(line) => (i == 0).then_some(line.as_str()),
            Backing::MultiLine(lines) => lines.get(i).map(String::as_str),
        }
    }

    /// Validate `start..end` on line `line` and return a span for it.
    ///
    /// Crate-private: a span carries no record identity, so it must only
    /// ever be minted by the record that will store it.
    pub(crate) fn span(&self, line: usize, start: usize, end: usize) -> Result<TextSpan, RecordError> {
        if matches!(self, Backing::None) {
            return Err(RecordError::NoBacking);
        }
        let text = self.line(line).ok_or(RecordError::LineOutOfRange {
            line,
            lines: self.line_count(),
        })?;
        if start > end || end > text.len() {
            return Err(RecordError::SpanOutOfBounds {
                start,
                end,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(RecordError::NotCharBoundary { start, end });
        }
        TextSpan::new(line, start, end).ok_or(RecordError::SpanOutOfBounds {
            start,
            end,
            len: text.len(),
        })
    }

    /// Resolve a span minted by `Backing::span` on this same backing.
    #[inline]
    pub(crate) fn resolve(&self, span: &TextSpan) -> &str {
        let text = self
            .line(span.line())
            .and_then(|line| line.get(span.start as usize..span.end as usize));
        debug_assert!(text.is_some(), "span {span:?} was minted by another record");
        text.unwrap_or_default()
    }

    /// Release the storage, returning how many lines were freed.
    pub fn release(self) -> usize {
        match self {
            Backing::None => 0,
            Backing::SingleLine(line) => {
                drop(line);
                1
            }
            Backing::MultiLine(lines) => {
                let n = lines.len();
                drop(lines);
                n
            }
        }
    }
}
