//! Business logic behind the slash commands.
//!
//! Services borrow the capabilities they need (an HTTP fetcher, a browser
//! launcher) and return plain domain models. They never talk to Discord;
//! rendering and responding is left to the `bot` layer.

pub mod browser;
pub mod fetch;
pub mod search;
pub mod status;
