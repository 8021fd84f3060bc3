//! Football API Library
//!
//! Teams, players and the transfer market that keeps both sides of every
//! signing consistent, exposed over HTTP.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
