//! Workshop Parts Monitor - GUI Library
//!
//! This module exposes internal state and views for testing.

pub mod state;
pub mod theme;
pub mod views;
