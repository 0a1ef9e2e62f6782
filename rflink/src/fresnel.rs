//! Fresnel zone math.
//!
//! # References
//!
//! 1. [Fresnel zone](https://en.wikipedia.org/wiki/Fresnel_zone)
//! 1. [ITU-R P.530](https://www.itu.int/rec/R-REC-P.530)

use crate::RfLinkError;
use num_traits::{Float, FromPrimitive};
use std::{iter::Iterator, ops::Range};

/// Speed of light in m/s.
pub const C: f64 = 299_792_458.0;

const HZ_PER_GHZ: f64 = 1e9;

/// Returns the wavelength, in meters, of a `freq_ghz` signal.
pub fn wavelength_m(freq_ghz: f64) -> Result<f64, RfLinkError> {
    if freq_ghz.is_finite() && freq_ghz > 0.0 {
        Ok(C / (freq_ghz * HZ_PER_GHZ))
    } else {
        Err(RfLinkError::InvalidParameter {
            name: "freq_ghz",
            value: freq_ghz,
        })
    }
}

/// Returns the radius of the `zone`th fresnel zone at a point `d1`
/// meters from one end and `d2` meters from the other.
///
/// Zero-length paths have a zero radius.
pub fn fresnel_radius<T>(zone: T, wavelength_m: T, d1: T, d2: T) -> T
where
    T: Float,
{
    let total = d1 + d2;
    if total <= T::zero() {
        return T::zero();
    }
    (zone * wavelength_m * d1 * d2 / total).sqrt()
}

/// Returns the first fresnel zone radius, in meters, at the midpoint
/// of a `length_m` long link.
///
/// Equivalent to `fresnel_radius(1, λ, L/2, L/2)`.
pub fn first_fresnel_radius_at_midpoint(length_m: f64, freq_ghz: f64) -> Result<f64, RfLinkError> {
    let wavelength = wavelength_m(freq_ghz)?;
    if !(length_m.is_finite() && length_m >= 0.0) {
        return Err(RfLinkError::InvalidParameter {
            name: "length_m",
            value: length_m,
        });
    }
    Ok(0.5 * (wavelength * length_m).sqrt())
}

/// Represents the nth fresnel zone of a radio link.
#[derive(Debug, Clone, Copy)]
pub struct FresnelZone<T> {
    zone: u8,
    wavelength_m: T,
    distance_m: T,
}

impl FresnelZone<f64> {
    /// Returns the `zone`th fresnel zone of a `distance_m` long link
    /// at `freq_ghz`.
    pub fn new(zone: u8, freq_ghz: f64, distance_m: f64) -> Result<Self, RfLinkError> {
        if zone == 0 {
            return Err(RfLinkError::InvalidParameter {
                name: "zone",
                value: 0.0,
            });
        }
        if !(distance_m.is_finite() && distance_m >= 0.0) {
            return Err(RfLinkError::InvalidParameter {
                name: "distance_m",
                value: distance_m,
            });
        }
        Ok(Self {
            zone,
            wavelength_m: wavelength_m(freq_ghz)?,
            distance_m,
        })
    }
}

impl<T> FresnelZone<T>
where
    T: Float + FromPrimitive,
{
    /// Radius at `d1` meters from the start of the link.
    pub fn radius_at(&self, d1: T) -> T {
        let d1 = d1.max(T::zero()).min(self.distance_m);
        fresnel_radius(
            T::from_u8(self.zone).unwrap_or_else(T::one),
            self.wavelength_m,
            d1,
            self.distance_m - d1,
        )
    }

    /// Returns an iterator of `(d1, radius)` pairs at `len` evenly
    /// spaced points from start to end of the link.
    pub fn iter(&self, len: usize) -> FresnelZoneIter<T> {
        FresnelZoneIter {
            zone: *self,
            range: 0..len,
        }
    }
}

/// Walks a fresnel zone from one end of its link to the other.
#[derive(Debug)]
pub struct FresnelZoneIter<T> {
    zone: FresnelZone<T>,
    range: Range<usize>,
}

impl<T> Iterator for FresnelZoneIter<T>
where
    T: Float + FromPrimitive,
{
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<(T, T)> {
        let n = self.range.next()?;
        let d1 = match (T::from_usize(n), T::from_usize(self.range.end - 1)) {
            (Some(n), Some(segments)) if segments > T::zero() => {
                self.zone.distance_m * (n / segments)
            }
            _ => T::zero(),
        };
        Some((d1, self.zone.radius_at(d1)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> ExactSizeIterator for FresnelZoneIter<T> where T: Float + FromPrimitive {}

#[cfg(test)]
mod tests {
    use super::{
        first_fresnel_radius_at_midpoint, fresnel_radius, wavelength_m, FresnelZone, C,
    };
    use crate::RfLinkError;
    use approx::assert_relative_eq;

    #[test]
    fn test_wavelength() {
        assert_relative_eq!(wavelength_m(5.0).unwrap(), 0.059_958_491_6);
        assert_relative_eq!(wavelength_m(0.9).unwrap(), C / 900e6, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_frequency() {
        for freq in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                first_fresnel_radius_at_midpoint(1e3, freq),
                Err(RfLinkError::InvalidParameter { name: "freq_ghz", .. })
            ));
        }
    }

    #[test]
    fn test_negative_length() {
        assert_eq!(
            first_fresnel_radius_at_midpoint(-1.0, 5.0),
            Err(RfLinkError::InvalidParameter {
                name: "length_m",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_midpoint_radius_10km_5ghz() {
        // λ ≈ 0.05996 m, r = 0.5 * sqrt(λ * 10km)
        let r = first_fresnel_radius_at_midpoint(10e3, 5.0).unwrap();
        assert_relative_eq!(r, 12.243_211_547_629_16, max_relative = 1e-9);
    }

    #[test]
    fn test_midpoint_radius_zero_length() {
        assert_eq!(first_fresnel_radius_at_midpoint(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_midpoint_radius_monotonic_in_length() {
        let mut last = 0.0;
        for km in 1..50 {
            let r = first_fresnel_radius_at_midpoint(f64::from(km) * 1e3, 2.4).unwrap();
            assert!(r > last);
            last = r;
        }
    }

    #[test]
    fn test_midpoint_matches_general_formula() {
        let wavelength = wavelength_m(5.0).unwrap();
        assert_relative_eq!(
            first_fresnel_radius_at_midpoint(8e3, 5.0).unwrap(),
            fresnel_radius(1.0, wavelength, 4e3, 4e3),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_zone_rejected() {
        assert!(FresnelZone::new(0, 5.0, 1e3).is_err());
    }

    #[test]
    fn test_bad_distance_rejected() {
        for distance_m in [-100.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                FresnelZone::new(1, 0.9, distance_m),
                Err(RfLinkError::InvalidParameter { name: "distance_m", .. })
            ));
        }
        assert!(FresnelZone::new(1, 0.9, 0.0).is_ok());
    }

    #[test]
    fn test_zero_len_fresnel_zone_iter() {
        let mut iter = FresnelZone::new(1, 1.0, 10e3).unwrap().iter(0);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_1st_fresnel_zone() {
        let zone = FresnelZone::new(1, 0.9, 1e3).unwrap();
        let radii: Vec<(f64, f64)> = zone.iter(3).collect();
        assert_eq!(radii.len(), 3);
        assert_eq!(radii[0], (0.0, 0.0));
        assert_eq!(radii[1].0, 500.0);
        assert_relative_eq!(radii[1].1, 9.125_551_094_469_735, max_relative = 1e-12);
        assert_eq!(radii[2], (1e3, 0.0));
    }

    #[test]
    fn test_higher_zones_scale_with_sqrt_n() {
        let first = FresnelZone::new(1, 0.9, 1e3).unwrap().radius_at(500.0);
        let third = FresnelZone::new(3, 0.9, 1e3).unwrap().radius_at(500.0);
        assert_relative_eq!(third, first * 3f64.sqrt(), max_relative = 1e-12);
    }
}
