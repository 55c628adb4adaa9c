//! Single-pass scanning of markup values.
//!
//! All reads of a markup value go through [`iterate_mentions_markup`]: one
//! left-to-right pass with the set's combined pattern, reporting literal
//! runs and mention occurrences with synchronized offsets in markup space
//! and plain-text space. The extractor, the occurrence list, and the
//! position mapper are all thin folds over that pass.

pub mod combined;
pub mod iterate;
pub mod occurrences;
pub mod plain_text;

pub use iterate::{LiteralRun, RawMention, ScanEvent, iterate_mentions_markup};
pub use occurrences::{MentionOccurrence, get_mentions};
pub use plain_text::get_plain_text;
