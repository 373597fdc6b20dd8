use chrono::{DateTime, Duration, Utc};

use crate::errors::SolarError;

/// Fixed geographic description of the site, set once at startup.
///
/// Only `latitude` enters the horizontal-position formula; longitude,
/// elevation, slope and aspect are validated and retained for callers
/// (e.g. radiation models on tilted surfaces) but unused here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteParameters {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub slope: f64,
    pub aspect: f64,
}

impl SiteParameters {
    /// Fails fast on out-of-range or non-finite coordinates, before any
    /// sample is processed.
    pub fn new(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        slope: f64,
        aspect: f64,
    ) -> Result<Self, SolarError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::Configuration {
                name: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::Configuration {
                name: "longitude",
                value: longitude,
            });
        }
        for (name, value) in [("elevation", elevation), ("slope", slope), ("aspect", aspect)] {
            if !value.is_finite() {
                return Err(SolarError::Configuration { name, value });
            }
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
            slope,
            aspect,
        })
    }
}

/// Inclusive UTC time range sampled at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub step: Duration,
}

/// Chronological samples: fractional hour of day in [0, 24) paired with
/// the 1-based UTC day of year. Both vectors always have equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub fractional_hour: Vec<f64>,
    pub day_of_year: Vec<u32>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.fractional_hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractional_hour.is_empty()
    }
}

/// Day angle (radians) and top-of-atmosphere irradiance (W/m²) per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceSeries {
    pub day_angle: Vec<f64>,
    pub irradiance: Vec<f64>,
}

/// Solver output, aligned one-to-one with the input time series.
///
/// Altitude is in [-90°, 90°]. Azimuth is the single arc-cosine branch in
/// [0°, 180°]: morning and afternoon positions at the same hour offset map
/// to the same value. Callers needing a full 0°-360° azimuth must
/// disambiguate with the sign of the hour angle themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSeries {
    pub altitude: Vec<f64>,
    pub azimuth: Vec<f64>,
}

impl SolarSeries {
    pub fn len(&self) -> usize {
        self.altitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude.is_empty()
    }
}

/// What to do when floating-point drift pushes an inverse-trig argument
/// outside [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Clamp to [-1, 1] and log a warning. Non-finite arguments still fail.
    #[default]
    Clamp,
    /// Return a `SolarError::Domain` instead.
    Fail,
}
