use std::ops::Range;

use tracing::debug;

use super::record::Record;
use crate::error::RecordError;
use crate::types::FieldText;

impl<'a> Record<'a> {
    // ════════════════════════════════════════════════════════════════════════
    // Reordering
    // ════════════════════════════════════════════════════════════════════════

    /// Move `key` to the front. No-op if absent.
    pub fn move_to_head(&mut self, key: &str) {
        if let Some(id) = self.find_entry(key) {
            self.unlink(id);
            self.link_at_head(id);
        }
    }

    /// Move `key` to the back. No-op if absent.
    pub fn move_to_tail(&mut self, key: &str) {
        if let Some(id) = self.find_entry(key) {
            self.unlink(id);
            self.link_at_tail(id);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Rename
    // ════════════════════════════════════════════════════════════════════════

    /// Rename `old_key` to `new_key`, keeping the field's position.
    ///
    /// If another field is already called `new_key` it is removed, value and
    /// all, so the renamed field wins:
    ///
    /// ```text
    ///   x=3,y=4,z=5  --rename y->z-->  x=3,z=4
    /// ```
    ///
    /// The old key text is released if it was owned. `new_key`'s ownership
    /// becomes the field's key ownership. No-op if `old_key` is absent.
    pub fn rename(&mut self, old_key: &str, new_key: FieldText<'a>) {
        let Some(old_id) = self.find_entry(old_key) else {
            return;
        };
        let collision = self
            .find_entry(self.resolve(&new_key))
            .filter(|&id| id != old_id);

        if let Some(new_id) = collision {
            debug!(
                old_key,
                new_key = self.resolve(&new_key),
                "rename overwrites existing field"
            );
            self.unlink(new_id);
            self.dealloc(new_id);
        }
        self.entry_mut(old_id).key = new_key;
    }

    /// [`Record::rename`] to a key viewing `range` of backing line `line`.
    pub fn rename_view(
        &mut self,
        old_key: &str,
        line: usize,
        range: Range<usize>,
    ) -> Result<(), RecordError> {
        let new_key = self.view(line, range)?;
        self.rename(old_key, new_key);
        Ok(())
    }
}
