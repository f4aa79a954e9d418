// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles for Dudo preference crates.
#![forbid(unsafe_code)]
//!
//! - [`store`] - In-memory preference store fake for testing without filesystem

pub mod store;

pub use store::InMemoryPreferenceStore;
