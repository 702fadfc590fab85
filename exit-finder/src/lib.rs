//! Subway exit facility status finder.
//!
//! Answers: "which elevators, escalators, and wheelchair lifts at the
//! nearest subway station are out of service right now?" Resolves the
//! nearest station from device coordinates via a place-search API, then
//! queries the Seoul transit facility dataset and collapses the per-exit
//! rows into one display row per facility kind.

pub mod cache;
pub mod domain;
pub mod event;
pub mod facilities;
pub mod location;
pub mod places;
pub mod state;
pub mod summary;
