//! Click handlers for the three page controls.
//!
//! Each control reacts to a single click and runs to completion; none of
//! them calls another. They are generic over [`crate::dom::Dom`] and hold no
//! browser handles of their own.

pub mod language;
pub mod scroll;
pub mod theme;
