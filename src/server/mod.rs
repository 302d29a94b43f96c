//! Listening and accept-loop supervision.

pub mod listener;
