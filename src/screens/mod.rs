//! The three terminal screens of the session: input, loading, result.
//!
//! Screens render state and collect user actions; every transition goes
//! through the [`crate::flow::SessionController`].

pub mod input;
pub mod loading;
pub mod result;
