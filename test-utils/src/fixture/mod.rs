//! Canned remote documents.
//!
//! Fixtures mirror the shape of what the real hosts return so tests can run
//! offline against the stub server or feed parsers directly.
//!
//! - `status_page` - Statuspage.io `status.json` summaries
//! - `html` - Rendered PlayStation and Xbox status pages
//! - `mod_database` - Arisen Studio mod database and category files

pub mod html;
pub mod mod_database;
pub mod status_page;
