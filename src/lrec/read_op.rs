use rustc_hash::FxHashSet;

use super::record::Record;
use crate::backing::{Backing, RecordOrigin};
use crate::error::RecordError;
use crate::types::{EntryId, FieldIter, FieldRef, FieldText};

impl<'a> Record<'a> {
    // ════════════════════════════════════════════════════════════════════════
    // Internal: text resolution and lookup
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub(crate) fn resolve<'s>(&'s self, text: &'s FieldText<'a>) -> &'s str {
        match text {
            FieldText::Borrowed(s) => *s,
            FieldText::Owned(s) => s.as_str(),
            FieldText::Backed(span) => self.backing.resolve(span),
        }
    }

    /// Linear scan, head to tail, for an exact byte-wise key match.
    pub(crate) fn find_entry(&self, key: &str) -> Option<EntryId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let entry = self.entry(id);
            if self.resolve(&entry.key) == key {
                return Some(id);
            }
            cursor = entry.next;
        }
        None
    }

    #[inline]
    pub(crate) fn next_of(&self, id: EntryId) -> Option<EntryId> {
        self.entry(id).next
    }

    pub(crate) fn field_ref(&self, id: EntryId) -> FieldRef<'_> {
        let entry = self.entry(id);
        FieldRef {
            id,
            key: self.resolve(&entry.key),
            value: self.resolve(&entry.value),
            key_ownership: entry.key.ownership(),
            value_ownership: entry.value.ownership(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Read access
    // ════════════════════════════════════════════════════════════════════════

    /// Find a field by exact key.
    #[inline]
    pub fn find(&self, key: &str) -> Option<FieldRef<'_>> {
        self.find_entry(key).map(|id| self.field_ref(id))
    }

    /// Value of `key`, if present.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find_entry(key)
            .map(|id| self.resolve(&self.entry(id).value))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_entry(key).is_some()
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.field_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.field_count == 0
    }

    pub fn head(&self) -> Option<FieldRef<'_>> {
        self.head.map(|id| self.field_ref(id))
    }

    pub fn tail(&self) -> Option<FieldRef<'_>> {
        self.tail.map(|id| self.field_ref(id))
    }

    /// Fields in insertion order.
    #[inline]
    pub fn iter(&self) -> FieldIter<'_, 'a> {
        FieldIter {
            record: self,
            cursor: self.head,
            remaining: self.field_count,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|f| f.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|f| f.value)
    }

    #[inline]
    pub fn backing(&self) -> &Backing {
        &self.backing
    }

    #[inline]
    pub fn origin(&self) -> RecordOrigin {
        self.origin
    }

    /// Walk the list and verify links, head/tail, `field_count`, and key
    /// uniqueness. Meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), RecordError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut prev: Option<EntryId> = None;
        let mut cursor = self.head;
        let mut n = 0usize;

        while let Some(id) = cursor {
            let entry = self
                .slots
                .get(id.index())
                .and_then(Option::as_ref)
                .ok_or(RecordError::Corrupt {
                    reason: "link to an empty slot",
                })?;
            if entry.prev != prev {
                return Err(RecordError::Corrupt {
                    reason: "prev link does not match traversal",
                });
            }
            let key = self.resolve(&entry.key);
            if !seen.insert(key) {
                return Err(RecordError::DuplicateKey(key.to_string()));
            }
            n += 1;
            if n > self.slots.len() {
                return Err(RecordError::Corrupt {
                    reason: "cycle in field list",
                });
            }
            prev = Some(id);
            cursor = entry.next;
        }

        if self.tail != prev {
            return Err(RecordError::Corrupt {
                reason: "tail is not the last linked entry",
            });
        }
        if n != self.field_count {
            return Err(RecordError::Corrupt {
                reason: "field_count differs from list length",
            });
        }
        let live = self.slots.iter().filter(|s| s.is_some()).count();
        if live != n {
            return Err(RecordError::Corrupt {
                reason: "live entry not reachable from head",
            });
        }
        Ok(())
    }
}

impl<'r, 'a> IntoIterator for &'r Record<'a> {
    type Item = FieldRef<'r>;
    type IntoIter = FieldIter<'r, 'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
