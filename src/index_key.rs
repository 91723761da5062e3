// ─── Small-Integer Key Cache ────────────────────────────────────────────────
//
// Positional formats (NIDX, implicit CSV headers) name their fields "1",
// "2", "3", ... for every single record. Keys up to INDEX_KEY_CACHE_MAX come
// from a shared table and are never released; anything else is formatted
// into an owned key (inline in the SmolStr, no heap for any i64).

use std::sync::LazyLock;

use smol_str::{SmolStr, format_smolstr};

use crate::types::FieldText;

pub const INDEX_KEY_CACHE_MAX: i64 = 100;

static INDEX_KEYS: LazyLock<Vec<SmolStr>> = LazyLock::new(|| {
    (0..=INDEX_KEY_CACHE_MAX)
        .map(|i| format_smolstr!("{i}"))
        .collect()
});

/// Key text for positional field `idx`.
///
/// Returns `FieldText::Borrowed` (shared, never released) for
/// `0..=INDEX_KEY_CACHE_MAX` and `FieldText::Owned` otherwise.
pub fn make_index_key(idx: i64) -> FieldText<'static> {
    if (0..=INDEX_KEY_CACHE_MAX).contains(&idx) {
        let keys: &'static [SmolStr] = INDEX_KEYS.as_slice();
        return FieldText::Borrowed(keys[idx as usize].as_str());
    }
    FieldText::Owned(format_smolstr!("{idx}"))
}

#[cfg(test)]
mod index_key_tests {
    use super::*;
    use crate::types::Ownership;

    #[test]
    fn test_cached_key_is_shared() {
        let a = make_index_key(7);
        let b = make_index_key(7);
        assert_eq!(a, FieldText::Borrowed("7"));
        assert_eq!(a.ownership(), Ownership::Borrowed);
        match (a, b) {
            (FieldText::Borrowed(x), FieldText::Borrowed(y)) => assert!(std::ptr::eq(x, y)),
            other => panic!("expected borrowed keys, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_bounds() {
        assert_eq!(make_index_key(0), FieldText::Borrowed("0"));
        assert_eq!(make_index_key(100), FieldText::Borrowed("100"));
        assert_eq!(make_index_key(101), FieldText::owned("101"));
    }

    #[test]
    fn test_uncached_key_is_owned() {
        let k = make_index_key(150);
        assert_eq!(k.ownership(), Ownership::Owned);
        assert_eq!(k, FieldText::owned("150"));
    }

    #[test]
    fn test_negative_and_extreme_keys() {
        assert_eq!(make_index_key(-1), FieldText::owned("-1"));
        assert_eq!(make_index_key(i64::MIN), FieldText::owned("-9223372036854775808"));
        assert_eq!(make_index_key(i64::MAX), FieldText::owned("9223372036854775807"));
    }
}
