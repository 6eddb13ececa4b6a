// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Event request configuration.
//!
//! [`RiseSetRequest`] bundles the calendar date with the two tunable knobs
//! of the sunrise equation: the requested direction ([`SolarEvent`]) and the
//! solar [`zenith`] angle. Field defaults mirror the conventional "official"
//! sunrise/sunset definition: `event = Sunrise`, `zenith = 90.8°`.

use chrono::NaiveDate;
use qtty::Degrees;

/// Solar zenith angles for the standard event definitions.
///
/// The zenith encodes atmospheric refraction plus the solar disk radius:
/// 90.8° marks the upper limb of the refracted Sun crossing the horizon,
/// while the larger angles define the three twilight thresholds.
pub mod zenith {
    use qtty::Degrees;

    /// Official sunrise/sunset: upper limb on the horizon.
    pub const OFFICIAL: Degrees = Degrees::new(90.8);
    /// Civil twilight: Sun's centre 6° below the horizon.
    pub const CIVIL: Degrees = Degrees::new(96.0);
    /// Nautical twilight: Sun's centre 12° below the horizon.
    pub const NAUTICAL: Degrees = Degrees::new(102.0);
    /// Astronomical twilight: Sun's centre 18° below the horizon.
    pub const ASTRONOMICAL: Degrees = Degrees::new(108.0);
}

/// The requested event direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEvent {
    /// Morning crossing (sun climbing through the zenith threshold).
    #[default]
    Sunrise,
    /// Evening crossing (sun descending through the zenith threshold).
    Sunset,
}

/// Configuration for a single rise/set computation.
///
/// Construct with [`RiseSetRequest::sunrise`] / [`RiseSetRequest::sunset`]
/// for the common cases, then override the zenith with
/// [`with_zenith`](RiseSetRequest::with_zenith) for twilight queries.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use riseset::{zenith, RiseSetRequest, SolarEvent};
///
/// let date = NaiveDate::from_ymd_opt(2022, 6, 7).unwrap();
/// let request = RiseSetRequest::sunrise(date).with_zenith(zenith::CIVIL);
/// assert_eq!(request.event, SolarEvent::Sunrise);
/// assert_eq!(request.zenith, zenith::CIVIL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetRequest {
    /// Calendar date of the event (read-only; never mutated).
    pub date: NaiveDate,
    /// Requested direction. Defaults to [`SolarEvent::Sunrise`].
    pub event: SolarEvent,
    /// Solar zenith angle. Defaults to [`zenith::OFFICIAL`] (90.8°).
    pub zenith: Degrees,
}

impl RiseSetRequest {
    /// Request with default direction (sunrise) and official zenith.
    #[inline]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            event: SolarEvent::Sunrise,
            zenith: zenith::OFFICIAL,
        }
    }

    /// Sunrise request at the official zenith.
    #[inline]
    pub const fn sunrise(date: NaiveDate) -> Self {
        Self::new(date)
    }

    /// Sunset request at the official zenith.
    #[inline]
    pub const fn sunset(date: NaiveDate) -> Self {
        Self {
            date,
            event: SolarEvent::Sunset,
            zenith: zenith::OFFICIAL,
        }
    }

    /// Override the event direction.
    #[inline]
    pub const fn with_event(mut self, event: SolarEvent) -> Self {
        self.event = event;
        self
    }

    /// Override the zenith angle (e.g. a [`zenith`] twilight constant).
    #[inline]
    pub const fn with_zenith(mut self, zenith: Degrees) -> Self {
        self.zenith = zenith;
        self
    }
}
