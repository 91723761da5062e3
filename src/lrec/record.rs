use tracing::trace;

use crate::backing::{Backing, RecordOrigin};
use crate::types::{EntryId, FieldText};

// ─── FieldEntry ─────────────────────────────────────────────────────────────

/// One key/value pair and its position in the record's order.
#[derive(Debug, Clone)]
pub(crate) struct FieldEntry<'a> {
    pub(crate) key: FieldText<'a>,
    pub(crate) value: FieldText<'a>,
    pub(crate) prev: Option<EntryId>,
    pub(crate) next: Option<EntryId>,
}

// ─── Record ─────────────────────────────────────────────────────────────────

/// An insertion-ordered row of fields, optionally backed by the raw text it
/// was parsed from.
///
/// Entries live in a slot arena and are chained by `prev`/`next` ids, so
/// unlink and relink are O(1) once an entry is found. Lookup is a linear scan:
/// records are narrow and no secondary index is kept.
///
/// `'a` is the lifetime of caller-borrowed text (literals, cached index keys).
/// Text viewing into the record's own backing is addressed by span instead.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub(crate) slots: Vec<Option<FieldEntry<'a>>>,
    pub(crate) free: Vec<EntryId>,
    pub(crate) head: Option<EntryId>,
    pub(crate) tail: Option<EntryId>,
    pub(crate) field_count: usize,
    pub(crate) backing: Backing,
    pub(crate) origin: RecordOrigin,
}

/// What a call to [`Record::release`] freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseStats {
    pub entries: usize,
    pub owned_keys: usize,
    pub owned_values: usize,
    pub backing_lines: usize,
}

impl<'a> Record<'a> {
    fn with_backing(backing: Backing, origin: RecordOrigin) -> Self {
        trace!(?origin, lines = backing.line_count(), "record allocated");
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            field_count: 0,
            backing,
            origin,
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Constructors
    // ════════════════════════════════════════════════════════════════════════

    /// A record with no backing storage, for synthesized rows.
    pub fn unbacked() -> Self {
        Self::with_backing(Backing::None, RecordOrigin::Unbacked)
    }

    /// DKVP line (`a=1,b=2`); fields may view into `line`.
    pub fn dkvp_backed(line: String) -> Self {
        Self::with_backing(Backing::SingleLine(line), RecordOrigin::Dkvp)
    }

    /// Implicitly-indexed line (`x y z`); fields may view into `line`.
    pub fn nidx_backed(line: String) -> Self {
        Self::with_backing(Backing::SingleLine(line), RecordOrigin::Nidx)
    }

    /// CSV data line. Same storage and release as [`Record::dkvp_backed`].
    pub fn csv_backed(data_line: String) -> Self {
        Self::with_backing(Backing::SingleLine(data_line), RecordOrigin::Csv)
    }

    /// CSV-lite data line. Same storage and release as [`Record::dkvp_backed`].
    pub fn csvlite_backed(data_line: String) -> Self {
        Self::with_backing(Backing::SingleLine(data_line), RecordOrigin::CsvLite)
    }

    /// XTAB stanza: one `key value` pair per line.
    pub fn xtab_backed(lines: Vec<String>) -> Self {
        Self::with_backing(Backing::MultiLine(lines), RecordOrigin::Xtab)
    }

    pub fn literal_1(k1: &'a str, v1: &'a str) -> Self {
        let mut rec = Self::unbacked();
        rec.put(k1, v1);
        rec
    }

    pub fn literal_2(k1: &'a str, v1: &'a str, k2: &'a str, v2: &'a str) -> Self {
        let mut rec = Self::literal_1(k1, v1);
        rec.put(k2, v2);
        rec
    }

    pub fn literal_3(
        k1: &'a str,
        v1: &'a str,
        k2: &'a str,
        v2: &'a str,
        k3: &'a str,
        v3: &'a str,
    ) -> Self {
        let mut rec = Self::literal_2(k1, v1, k2, v2);
        rec.put(k3, v3);
        rec
    }

    #[allow(clippy::too_many_arguments)]
    pub fn literal_4(
        k1: &'a str,
        v1: &'a str,
        k2: &'a str,
        v2: &'a str,
        k3: &'a str,
        v3: &'a str,
        k4: &'a str,
        v4: &'a str,
    ) -> Self {
        let mut rec = Self::literal_3(k1, v1, k2, v2, k3, v3);
        rec.put(k4, v4);
        rec
    }

    // ════════════════════════════════════════════════════════════════════════
    // Release
    // ════════════════════════════════════════════════════════════════════════

    /// Release every owned key and value, then the backing storage.
    ///
    /// Views into the backing are never released on their own. Dropping a
    /// record frees the same memory; this variant reports what was freed.
    pub fn release(self) -> ReleaseStats {
        let Record {
            mut slots,
            head,
            backing,
            origin,
            ..
        } = self;

        let mut stats = ReleaseStats::default();
        let mut cursor = head;
        while let Some(id) = cursor {
            let Some(entry) = slots.get_mut(id.index()).and_then(Option::take) else {
                break;
            };
            stats.entries += 1;
            stats.owned_keys += entry.key.is_owned() as usize;
            stats.owned_values += entry.value.is_owned() as usize;
            cursor = entry.next;
        }
        drop(slots);
        stats.backing_lines = backing.release();

        trace!(
            ?origin,
            entries = stats.entries,
            owned_keys = stats.owned_keys,
            owned_values = stats.owned_values,
            backing_lines = stats.backing_lines,
            "record released"
        );
        stats
    }

    // ════════════════════════════════════════════════════════════════════════
    // Internal: arena and links
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub(crate) fn entry(&self, id: EntryId) -> &FieldEntry<'a> {
        match &self.slots[id.index()] {
            Some(entry) => entry,
            None => unreachable!("dangling entry id {id:?}"),
        }
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, id: EntryId) -> &mut FieldEntry<'a> {
        match &mut self.slots[id.index()] {
            Some(entry) => entry,
            None => unreachable!("dangling entry id {id:?}"),
        }
    }

    /// Store an unlinked entry, reusing a freed slot if there is one.
    pub(crate) fn alloc(&mut self, key: FieldText<'a>, value: FieldText<'a>) -> EntryId {
        let entry = FieldEntry {
            key,
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(entry);
                id
            }
            None => {
                let id = EntryId(self.slots.len() as u32);
                self.slots.push(Some(entry));
                id
            }
        }
    }

    /// Take an unlinked entry out of its slot.
    pub(crate) fn dealloc(&mut self, id: EntryId) -> Option<FieldEntry<'a>> {
        let entry = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        Some(entry)
    }

    pub(crate) fn unlink(&mut self, id: EntryId) {
        let (prev, next) = {
            let e = self.entry(id);
            (e.prev, e.next)
        };
        match prev {
            Some(p) => self.entry_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entry_mut(n).prev = prev,
            None => self.tail = prev,
        }
        let e = self.entry_mut(id);
        e.prev = None;
        e.next = None;
        self.field_count -= 1;
    }

    pub(crate) fn link_at_head(&mut self, id: EntryId) {
        let old_head = self.head;
        {
            let e = self.entry_mut(id);
            e.prev = None;
            e.next = old_head;
        }
        match old_head {
            Some(h) => self.entry_mut(h).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.field_count += 1;
    }

    pub(crate) fn link_at_tail(&mut self, id: EntryId) {
        let old_tail = self.tail;
        {
            let e = self.entry_mut(id);
            e.prev = old_tail;
            e.next = None;
        }
        match old_tail {
            Some(t) => self.entry_mut(t).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.field_count += 1;
    }
}

/// Release `record` if present. `None` is a no-op.
pub fn release(record: Option<Record<'_>>) -> Option<ReleaseStats> {
    record.map(Record::release)
}
