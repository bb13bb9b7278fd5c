// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `fontpack`.
//!
//! - The `util` module contains a scripted rasterizer and helpers shared by the tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the helpers are compiled once.
//! - Put the "topic" of a test at the start of its name, e.g. `codec_round_trip` rather
//!   than `round_trip_codec`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod atlas;
mod util;
