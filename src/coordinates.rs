// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic coordinate value type.

use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An observer position on the Earth's surface.
///
/// Latitude is positive north of the equator, longitude positive east of
/// the Greenwich meridian. The struct is `Copy` and is passed by value into
/// every calculation; the calculator never mutates it.
///
/// # Preconditions
///
/// Latitude must lie in `[-90°, 90°]` and longitude in `[-180°, 180°]`.
/// Values outside those ranges are not rejected — the trigonometry simply
/// produces degenerate results — keeping the calculation allocation-free
/// and branch-minimal.
///
/// # Examples
///
/// ```rust
/// use qtty::Degrees;
/// use riseset::Coordinate;
///
/// let greenwich = Coordinate::new(Degrees::new(51.4779), Degrees::new(0.0));
/// assert_eq!(greenwich.latitude.value(), 51.4779);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Coordinate {
    /// Geodetic latitude, north positive.
    pub latitude: Degrees,
    /// Longitude, east positive.
    pub longitude: Degrees,
}

impl Coordinate {
    /// Create a coordinate from typed angles.
    #[inline]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate from raw degree values.
    #[inline]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// Serde support keeps the wire shape as two plain f64 fields so JSON
// payloads stay independent of the qtty representation.
#[cfg(feature = "serde")]
impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Coordinate", 2)?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Coordinate::from_degrees(raw.latitude, raw.longitude))
    }
}
