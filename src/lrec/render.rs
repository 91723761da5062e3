use std::fmt;
use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::record::Record;
use crate::config::{DEFAULT_OFS, DEFAULT_OPS, DEFAULT_ORS, RenderOptions};
use crate::error::RecordError;
use crate::types::{EntryId, FieldText};

/// Rendering of an absent record.
pub const NULL_RECORD: &str = "NULL";

const RENDER_ALLOC_LENGTH: usize = 256;

// ─── Ordered-pair rendering ─────────────────────────────────────────────────

/// Render as `k1<ops>v1<ofs>k2<ops>v2...<ors>`.
///
/// An absent record renders as `NULL<ors>`; an empty one as just `<ors>`.
pub fn render(record: Option<&Record<'_>>, ors: &str, ofs: &str, ops: &str) -> String {
    let mut out = String::with_capacity(RENDER_ALLOC_LENGTH);
    match record {
        None => out.push_str(NULL_RECORD),
        Some(rec) => rec.push_pairs(&mut out, ofs, ops),
    }
    out.push_str(ors);
    out
}

/// Write the default rendering (`k=v,k=v\n`) of `record` to `out`.
pub fn print<W: io::Write>(record: Option<&Record<'_>>, mut out: W) -> io::Result<()> {
    out.write_all(render(record, DEFAULT_ORS, DEFAULT_OFS, DEFAULT_OPS).as_bytes())
}

impl<'a> Record<'a> {
    fn push_pairs(&self, out: &mut String, ofs: &str, ops: &str) {
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(ofs);
            }
            out.push_str(field.key);
            out.push_str(ops);
            out.push_str(field.value);
        }
    }

    #[inline]
    pub fn render_with(&self, opts: &RenderOptions) -> String {
        render(Some(self), &opts.ors, &opts.ofs, &opts.ops)
    }

    /// Ordered JSON object of key → value.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Diagnostics
    // ════════════════════════════════════════════════════════════════════════

    /// Human-readable dump of the list structure. Not a stable format.
    ///
    /// Links are shown as arena slot ids (`#n`) rather than addresses, so the
    /// output is reproducible across runs.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(RENDER_ALLOC_LENGTH);
        out.push_str(&format!(
            "field_count = {} | origin: {:?}\n",
            self.field_count, self.origin
        ));
        out.push_str(&format!(
            "| head: {:>5} | tail: {:>5}\n",
            link(self.head),
            link(self.tail)
        ));
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let entry = self.entry(id);
            out.push_str(&format!(
                "| prev: {:>5} curr: {:>5} next: {:>5} | key: {:>12}{} | value: {:>12}{} |\n",
                link(entry.prev),
                link(Some(id)),
                link(entry.next),
                self.resolve(&entry.key),
                marker(&entry.key),
                self.resolve(&entry.value),
                marker(&entry.value),
            ));
            cursor = entry.next;
        }
        out
    }

    pub fn dump_titled(&self, title: &str) -> String {
        format!("{title}:\n{}\n", self.dump())
    }
}

fn link(id: Option<EntryId>) -> String {
    match id {
        Some(id) => format!("#{}", id.index()),
        None => "-".to_string(),
    }
}

// `*` owned, `^` view into backing, nothing for borrowed.
fn marker(text: &FieldText<'_>) -> &'static str {
    match text {
        FieldText::Owned(_) => "*",
        FieldText::Backed(_) => "^",
        FieldText::Borrowed(_) => " ",
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(Some(self), DEFAULT_ORS, DEFAULT_OFS, DEFAULT_OPS))
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.field_count))?;
        for field in self.iter() {
            map.serialize_entry(field.key, field.value)?;
        }
        map.end()
    }
}
