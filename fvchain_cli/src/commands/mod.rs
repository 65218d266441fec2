//! CLI subcommand implementations.

pub mod admin;
pub mod blocks;
pub mod health;
pub mod mining;
pub mod network;
pub mod transactions;
pub mod util;
pub mod wallet;
