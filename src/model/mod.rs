//! Domain models shared by the services and the bot layer.
//!
//! - `status` - Endpoint definitions, health classifications and reports
//! - `mod_database` - Remote mod database documents and search parameters

pub mod mod_database;
pub mod status;
