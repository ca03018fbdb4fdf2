//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is split by concern: `conversation` (history + pending flag),
//! `widget` (launcher/widget visibility and focus), and `source_modal`
//! (document cards). Each is a plain struct held in an `RwSignal` by the
//! root component.

pub mod conversation;
pub mod source_modal;
pub mod widget;
