//! # mapstream
//!
//! A **fluent, stream-style processing API** for key/value mappings.
//! Mapstream adapts any mapping (or any source of key/value pairs) into a
//! chainable pipeline of transformations, filters, and aggregations, then
//! collects the result back into a fresh mapping with an explicit,
//! fail-fast collision policy.
//!
//! ## Key Features
//!
//! - **Fluent pair pipeline** - chain `map`, `filter`, `flat_map`, and `peek`
//!   over keys, values, or whole pairs
//! - **Strict collection** - [`to_map`](MapStream::to_map) fails fast on
//!   duplicate keys instead of silently overwriting
//! - **Merge-aware collection** - [`to_map_merging`](MapStream::to_map_merging)
//!   resolves collisions with a caller-supplied merge function, applied in
//!   encounter order
//! - **Value distinctness and swapping** - `distinct_values` and `swap`, with
//!   merging variants for collision-heavy data
//! - **Plain iterators underneath** - every stage delegates to `std::iter`;
//!   [`MapStream`] is itself an [`Iterator`]
//! - **JSONL I/O** - read and write pair streams as JSON Lines (optional via
//!   the `io-jsonl` feature)
//!
//! ## Quick Start
//!
//! ```
//! use mapstream::from_entries;
//!
//! let totals = from_entries(vec![
//!     ("apples", 3_u32),
//!     ("pears", 2),
//!     ("apples", 4),
//! ])
//! .filter_values(|n| *n > 0)
//! .to_map_merging(|stored, incoming| stored + incoming);
//!
//! assert_eq!(totals["apples"], 7);
//! assert_eq!(totals["pears"], 2);
//! ```
//!
//! ## Core Concepts
//!
//! ### Pair
//!
//! A [`Pair<K, V>`] is an immutable key-value tuple, the element type of
//! every stream. Build one with [`pair()`], `Pair::new`, or a `(K, V)` tuple
//! conversion.
//!
//! ### MapStream
//!
//! A [`MapStream`] wraps an iterator of pairs and is consumed exactly once.
//! Streams are:
//! - **Lazy** - transformations run only when a terminal operation drains the
//!   stream
//! - **Single-threaded** - no parallel execution model, no suspension points
//! - **Type-safe** - generic over key and value types
//!
//! Construct one with [`from_map`], [`from_entries`], or [`from_pairs`].
//!
//! ### Collection and the collision policy
//!
//! Converting a pair stream back into a mapping is the one place where
//! duplicate keys matter:
//!
//! - [`to_map`](MapStream::to_map) returns
//!   `Result<HashMap<K, V>, DuplicateKeyError<K>>`. The first duplicate key
//!   aborts the collection; the error names the offending key.
//! - [`to_map_merging`](MapStream::to_map_merging) takes a binary merge
//!   function `(stored, incoming) -> merged` and never fails. Merges are
//!   applied strictly in encounter order, so order-dependent merge functions
//!   yield order-dependent results.
//! - [`to_grouped_map`](MapStream::to_grouped_map) keeps every value,
//!   grouped per key.
//!
//! The [`merge`] module ships ready-made merge functions (`keep_first`,
//! `keep_last`, `min`, `max`, `sum`).
//!
//! ```
//! use mapstream::{from_entries, merge};
//!
//! // Strict: duplicate keys are an error, not an overwrite.
//! let err = from_entries(vec![("a", 1), ("a", 2)]).to_map().unwrap_err();
//! assert_eq!(err.key, "a");
//!
//! // Merging: collisions resolved pairwise, in encounter order.
//! let m = from_entries(vec![("a", 1), ("a", 2)]).to_map_merging(merge::max);
//! assert_eq!(m["a"], 2);
//! ```
//!
//! ### Terminal queries
//!
//! Beyond collection, streams answer queries directly: `count`, the
//! `all`/`any`/`none` match families over pairs, keys, or values,
//! `min`/`max` by key or value, `find`, `fold`, `reduce_keys`,
//! `reduce_values`, `key_set`, and `value_set`.
//!
//! ## Feature Flags
//!
//! - `io-jsonl` *(default)* - JSON Lines I/O for pair streams
//!
//! ## Module Overview
//!
//! - [`pair`](mod@pair) - the `Pair` element type
//! - [`stream`] - `MapStream`, constructors, transformations, terminals
//! - [`collect`] - collection into mappings and `DuplicateKeyError`
//! - [`merge`] - ready-made merge functions
//! - [`io`] - JSONL I/O (feature-gated)
//! - [`testing`] - builders and assertions for pipeline tests

pub mod collect;
pub mod io;
pub mod merge;
pub mod pair;
pub mod stream;
pub mod testing;

// General re-exports
pub use collect::DuplicateKeyError;
pub use pair::{Pair, pair};
pub use stream::{MapStream, from_entries, from_map, from_pairs};

// Gated re-exports
#[cfg(feature = "io-jsonl")]
pub use io::jsonl::{read_jsonl_pairs, read_jsonl_stream, write_jsonl_pairs};
