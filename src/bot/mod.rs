//! Discord bot front end.
//!
//! Everything that talks to Discord lives here: the gateway client, the event
//! handler, slash command registration and the embeds the commands reply
//! with. The services under `crate::service` know nothing about Discord; this
//! module turns their plain results into messages.
//!
//! # Gateway Intents
//!
//! The bot only needs `GUILDS`. Slash command interactions are delivered
//! regardless of intents, and no message content is read.

pub mod command;
pub mod embed;
pub mod handler;
pub mod paginator;
pub mod start;

#[cfg(test)]
mod test;
