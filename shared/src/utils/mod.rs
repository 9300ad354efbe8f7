//! Common utility functions

pub mod digits;
pub mod email;
