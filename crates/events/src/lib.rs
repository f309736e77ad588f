//! Domain events and the audit journal that collects them.

pub mod event;
pub mod journal;

pub use event::Event;
pub use journal::Journal;
