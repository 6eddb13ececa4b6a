// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise / Sunset Calculator
//!
//! This crate computes the approximate **sunrise and sunset instants in UTC**
//! for a geographic coordinate and a calendar date, using the closed-form
//! almanac "sunrise equation". It is a stateless numeric calculator: no I/O,
//! no shared state, O(1) floating-point arithmetic per call.
//!
//! # Core types
//!
//! - [`Coordinate`] — observer latitude/longitude in [`qtty::Degrees`].
//! - [`RiseSetRequest`] — date + event direction + zenith angle, with
//!   documented defaults.
//! - [`SolarEvent`] — the requested direction ([`Sunrise`](SolarEvent::Sunrise)
//!   or [`Sunset`](SolarEvent::Sunset)).
//! - [`NoEventError`] — typed polar day/night outcome
//!   ([`NeverRises`](NoEventError::NeverRises) /
//!   [`NeverSets`](NoEventError::NeverSets)).
//!
//! # Entry points
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`sunrise`] | Sunrise at the official zenith (90.8°) |
//! | [`sunset`] | Sunset at the official zenith (90.8°) |
//! | [`compute_event`] | Full control: direction + custom zenith (twilight) |
//!
//! # Quick example
//!
//! ```rust
//! use chrono::{NaiveDate, Timelike};
//! use qtty::Degrees;
//! use riseset::{sunrise, Coordinate};
//!
//! let san_jose = Coordinate::new(Degrees::new(9.928069), Degrees::new(-84.090725));
//! let date = NaiveDate::from_ymd_opt(2022, 6, 7).unwrap();
//! let up = sunrise(san_jose, date).unwrap();
//! assert_eq!((up.hour(), up.minute()), (11, 15));
//! ```
//!
//! # Accuracy
//!
//! The almanac formula is an approximation: expect minute-level agreement
//! with published tables, not sub-minute precision. Atmospheric refraction
//! and the solar disk radius are folded into the fixed zenith constant
//! (see [`zenith`]); the non-default constants select civil, nautical and
//! astronomical twilight instead.
//!
//! # Preconditions
//!
//! Latitude must lie in `[-90°, 90°]` and longitude in `[-180°, 180°]`.
//! The core performs no runtime validation: out-of-range coordinates yield
//! mathematically degenerate results rather than a panic.

mod almanac;
mod civil;
mod coordinates;
mod error;
mod request;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use almanac::{compute_event, sunrise, sunset};
pub use coordinates::Coordinate;
pub use error::NoEventError;
pub use request::{zenith, RiseSetRequest, SolarEvent};
