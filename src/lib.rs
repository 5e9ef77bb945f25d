#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]

//! Embedded calendar container for a collaboration workspace client.
//!
//! The container mounts a sandboxed calendar view, fetches the calendar
//! list of the active workspace once per mount cycle and projects it into
//! the serialized configuration the sandbox consumes. Notification and
//! viewport-layout capabilities are injected by the host.

pub mod api;
pub mod calendar;
pub mod config;
pub mod container;
pub mod embed;
pub mod i18n;
pub mod layout;
pub mod messaging;

pub use container::{Container, Message, Phase, Task};
