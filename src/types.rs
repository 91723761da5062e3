use smol_str::SmolStr;

use crate::lrec::Record;

// ─── Ownership ──────────────────────────────────────────────────────────────

/// Whether the record is responsible for releasing a piece of field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// A view: caller-owned, static, or pointing into backing storage.
    Borrowed,
    /// Released together with the field entry.
    Owned,
}

// ─── TextSpan ───────────────────────────────────────────────────────────────

/// A byte range inside one line of a record's backing storage.
///
/// Spans are only minted inside the crate, by the record that stores them,
/// after checking bounds and char boundaries. Callers reach backing text
/// through `Record::put_view` and friends, which take plain ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub(crate) line: u32,
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl TextSpan {
    /// `None` if any coordinate does not fit in 32 bits.
    #[inline]
    pub(crate) fn new(line: usize, start: usize, end: usize) -> Option<Self> {
        Some(Self {
            line: u32::try_from(line).ok()?,
            start: u32::try_from(start).ok()?,
            end: u32::try_from(end).ok()?,
        })
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ─── FieldText ──────────────────────────────────────────────────────────────

/// Key or value text of a field, tagged with who owns it.
///
/// Dropping an `Owned` text releases it; `Borrowed` and `Backed` texts are
/// never released on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldText<'a> {
    Borrowed(&'a str),
    Backed(TextSpan),
    Owned(SmolStr),
}

impl<'a> FieldText<'a> {
    /// Independent copy of `text`, owned by whichever entry receives it.
    #[inline]
    pub fn owned(text: &str) -> Self {
        FieldText::Owned(SmolStr::new(text))
    }

    #[inline]
    pub fn ownership(&self) -> Ownership {
        match self {
            FieldText::Owned(_) => Ownership::Owned,
            FieldText::Borrowed(_) | FieldText::Backed(_) => Ownership::Borrowed,
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        self.ownership() == Ownership::Owned
    }
}

impl<'a> From<&'a str> for FieldText<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        FieldText::Borrowed(text)
    }
}

impl From<SmolStr> for FieldText<'_> {
    #[inline]
    fn from(text: SmolStr) -> Self {
        FieldText::Owned(text)
    }
}

impl From<String> for FieldText<'_> {
    #[inline]
    fn from(text: String) -> Self {
        FieldText::Owned(SmolStr::from(text))
    }
}

// ─── EntryId ────────────────────────────────────────────────────────────────

/// Stable arena index of a field entry. Slots are recycled after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) u32);

impl EntryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ─── FieldRef ───────────────────────────────────────────────────────────────

/// Read-only view of one field, with backed text already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'r> {
    pub id: EntryId,
    pub key: &'r str,
    pub value: &'r str,
    pub key_ownership: Ownership,
    pub value_ownership: Ownership,
}

// ─── Iterator ───────────────────────────────────────────────────────────────

/// Head-to-tail traversal of a record's fields.
pub struct FieldIter<'r, 'a> {
    pub(crate) record: &'r Record<'a>,
    pub(crate) cursor: Option<EntryId>,
    pub(crate) remaining: usize,
}

impl<'r, 'a> Iterator for FieldIter<'r, 'a> {
    type Item = FieldRef<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let field = self.record.field_ref(id);
        self.cursor = self.record.next_of(id);
        self.remaining = self.remaining.saturating_sub(1);
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'r, 'a> ExactSizeIterator for FieldIter<'r, 'a> {}
