//! Domain library for the freight brokerage automation platform.
//!
//! The crate is organized around two workflows sharing one set of scoring
//! primitives: `workflows::dispatch` ranks load opportunities, matches
//! carriers, and simulates rate negotiations; `workflows::leads` discovers
//! and qualifies shipper prospects from external fact sources. The
//! `scoring` and `ranking` modules hold the context-independent engine both
//! workflows blend their factors through.

pub mod config;
pub mod error;
pub mod ranking;
pub mod scoring;
pub mod telemetry;
pub mod workflows;
