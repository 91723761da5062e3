use std::ops::Range;

use super::record::Record;
use crate::error::RecordError;
use crate::types::FieldText;

impl<'a> Record<'a> {
    // ════════════════════════════════════════════════════════════════════════
    // Views into backing storage
    // ════════════════════════════════════════════════════════════════════════

    /// Text viewing `range` of backing line `line`. Crate-private: the span
    /// only means something to the record that minted it.
    pub(crate) fn view(&self, line: usize, range: Range<usize>) -> Result<FieldText<'a>, RecordError> {
        self.backing
            .span(line, range.start, range.end)
            .map(FieldText::Backed)
    }

    /// `put` a field whose key and value both view into backing line `line`.
    ///
    /// Views are addressed by range so they always resolve against this
    /// record's own backing; there is no way to carry one to another record:
    ///
    /// ```compile_fail
    /// let a = spooky_lrec::Record::dkvp_backed("abcdef=1".to_string());
    /// let key = a.view(0, 0..6).unwrap();
    /// ```
    pub fn put_view(
        &mut self,
        line: usize,
        key: Range<usize>,
        value: Range<usize>,
    ) -> Result<(), RecordError> {
        let key = self.view(line, key)?;
        let value = self.view(line, value)?;
        self.put(key, value);
        Ok(())
    }

    /// `put` a field whose value views into backing line `line`, under a key
    /// supplied by the caller (a header name or [`make_index_key`]).
    ///
    /// [`make_index_key`]: crate::index_key::make_index_key
    pub fn put_keyed_view(
        &mut self,
        key: impl Into<FieldText<'a>>,
        line: usize,
        value: Range<usize>,
    ) -> Result<(), RecordError> {
        let value = self.view(line, value)?;
        self.put(key, value);
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Insertion / update
    // ════════════════════════════════════════════════════════════════════════

    /// Set `key` to `value`, keeping ownership exactly as passed in: a plain
    /// `&str` stays borrowed, a `String` or `SmolStr` becomes owned.
    ///
    /// An existing key is updated in place: the old value is released if it
    /// was owned, and the entry's key text is left alone. A new key is
    /// appended at the tail.
    pub fn put(&mut self, key: impl Into<FieldText<'a>>, value: impl Into<FieldText<'a>>) {
        let (key, value) = (key.into(), value.into());
        debug_assert!(self.span_in_bounds(&key) && self.span_in_bounds(&value));
        match self.find_entry(self.resolve(&key)) {
            Some(id) => self.entry_mut(id).value = value,
            None => {
                let id = self.alloc(key, value);
                self.link_at_tail(id);
            }
        }
    }

    /// Like [`Record::put`], but copies `key` and `value` so the record owns
    /// them. On update only the value is copied.
    pub fn put_copy(&mut self, key: &str, value: &str) {
        match self.find_entry(key) {
            Some(id) => self.entry_mut(id).value = FieldText::owned(value),
            None => {
                let id = self.alloc(FieldText::owned(key), FieldText::owned(value));
                self.link_at_tail(id);
            }
        }
    }

    /// Like [`Record::put_copy`], but new keys go to the head.
    pub fn prepend(&mut self, key: &str, value: &str) {
        match self.find_entry(key) {
            Some(id) => self.entry_mut(id).value = FieldText::owned(value),
            None => {
                let id = self.alloc(FieldText::owned(key), FieldText::owned(value));
                self.link_at_head(id);
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Removal
    // ════════════════════════════════════════════════════════════════════════

    /// Unlink `key` and release whatever of it the record owned.
    /// Returns `false` if the key was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(id) = self.find_entry(key) else {
            return false;
        };
        self.unlink(id);
        self.dealloc(id).is_some()
    }

    #[inline]
    fn span_in_bounds(&self, text: &FieldText<'a>) -> bool {
        match text {
            FieldText::Backed(span) => self.backing.line(span.line()).is_some_and(|line| {
                line.get(span.start as usize..span.end as usize).is_some()
            }),
            _ => true,
        }
    }
}
