//! Gamehost — HTTP host for a browser-playable asset bundle.
//!
//! Requests are resolved by an ordered dispatch chain: static files out
//! of the `public/` bundle first, then the `/api` route table, then a
//! method-allowance check for routes that matched by path only. See
//! [`dispatch`] for the stage contract.

pub mod api;
pub mod cachebust;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod logger;
pub mod static_files;
