//! Pure helpers shared by state, services, and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` turns bot response text into display-safe structure and
//! `clock` supplies capture timestamps and their display strings.

pub mod clock;
pub mod format;
