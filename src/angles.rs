use log::warn;

use crate::errors::SolarError;
use crate::types::DomainPolicy;

/// Hour angle advance per hour away from solar noon, in radians (15°/hour).
pub const HOUR_ANGLE_RATE: f64 = 0.261799;

/// Sine of the ecliptic obliquity used by the declination series.
pub const DECLINATION_AMPLITUDE: f64 = 0.3978;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Day angle shifted by the truncated-Fourier perihelion correction.
pub fn corrected_day_angle(day_angle: f64) -> f64 {
    day_angle + (-1.4 + 0.0355 * (day_angle - 0.0489).sin())
}

/// Solar declination in radians. The argument of the arcsine is bounded by
/// `DECLINATION_AMPLITUDE`, so the result stays within ±23.45° and never
/// leaves the arcsine domain.
pub fn declination(day_angle: f64) -> f64 {
    (DECLINATION_AMPLITUDE * corrected_day_angle(day_angle).sin()).asin()
}

/// Hour angle in radians for a fractional hour of day, zero at solar noon,
/// negative in the morning.
pub fn hour_angle(fractional_hour: f64) -> f64 {
    HOUR_ANGLE_RATE * (fractional_hour - 12.0)
}

/// Rotation coefficients projecting the sun vector onto the local
/// horizontal plane. Intermediate only, recomputed per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionCosines {
    pub c11: f64,
    pub c22: f64,
    pub c13: f64,
    pub c31: f64,
    pub c33: f64,
}

impl DirectionCosines {
    pub fn new(latitude_rad: f64, declination_rad: f64) -> Self {
        let (sin_lat, cos_lat) = latitude_rad.sin_cos();
        let (sin_dec, cos_dec) = declination_rad.sin_cos();
        Self {
            c11: sin_lat * cos_dec,
            c22: cos_dec,
            c13: -cos_lat * sin_dec,
            c31: cos_lat * cos_dec,
            c33: sin_lat * sin_dec,
        }
    }
}

/// Guards an inverse-trig argument against floating-point drift.
///
/// Finite values slightly outside [-1, 1] are clamped (with a warning) or
/// rejected depending on the policy. Non-finite values cannot be clamped
/// meaningfully and fail under either policy.
pub fn checked_unit(
    value: f64,
    quantity: &'static str,
    policy: DomainPolicy,
) -> Result<f64, SolarError> {
    if (-1.0..=1.0).contains(&value) {
        return Ok(value);
    }
    if value.is_finite() && policy == DomainPolicy::Clamp {
        warn!("{quantity} argument {value} outside [-1, 1], clamping");
        return Ok(value.clamp(-1.0, 1.0));
    }
    Err(SolarError::Domain { quantity, value })
}
