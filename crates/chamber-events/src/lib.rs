//! Event model and recurring-event expansion for the chamber directory calendar.
//!
//! Events arrive from the content store as loosely-filled records. They are
//! decoded into [`event::Event`] values and expanded into concrete
//! [`expand::Occurrence`]s for a display range.

pub mod calendar;
pub mod error;
pub mod event;
pub mod expand;
