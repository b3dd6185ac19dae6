//! Utility helpers shared across the page controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from control logic
//! so the controls can run under plain `cargo test`.

pub mod timer;
