//! Helpers for asserting on Serenity builder objects.
//!
//! Serenity builders such as `CreateEmbed` expose no getters, but they serialize
//! to exactly the JSON sent to Discord. These helpers serialize a builder so
//! tests can assert on titles, fields and footers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::embed_json;
//!
//! let json = embed_json(&embed);
//! assert_eq!(json["title"], "Current Status");
//! ```

pub mod embed;

pub use embed::{embed_field, embed_json};
