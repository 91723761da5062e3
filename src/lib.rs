//! Ordered key/value records for streaming record-processing pipelines.
//!
//! A [`Record`] keeps fields in insertion order and tracks, per key and per
//! value, whether the text is owned by the record or is a view into caller
//! memory or the record's own [`Backing`] line(s).

pub mod backing;
pub mod config;
pub mod error;
pub mod index_key;
pub mod lrec;
pub mod types;

pub use backing::{Backing, RecordOrigin};
pub use config::RenderOptions;
pub use error::RecordError;
pub use index_key::{INDEX_KEY_CACHE_MAX, make_index_key};
pub use lrec::{Record, ReleaseStats, print, release, render};
pub use types::{EntryId, FieldIter, FieldRef, FieldText, Ownership, TextSpan};
