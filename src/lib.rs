//! Closed-form sun position over a sampled day.
//!
//! Computes solar altitude and azimuth for a fixed site across a UTC
//! sampling window, using a truncated-Fourier declination series, the
//! hour-angle rotation and a spherical-trig projection onto the local
//! horizontal plane. Extraterrestrial irradiance corrected for Earth-Sun
//! distance is derived along the way.
//!
//! The azimuth output is the raw arc-cosine branch in [0°, 180°]; morning
//! and afternoon are not distinguished. This is a property of the formula,
//! kept deliberately — see [`SolarSeries`].

pub mod angles;
pub mod errors;
pub mod irradiance;
pub mod position;
pub mod sampling;
pub mod types;

pub use angles::{
    corrected_day_angle, declination, deg_to_rad, hour_angle, rad_to_deg, DirectionCosines,
    DECLINATION_AMPLITUDE, HOUR_ANGLE_RATE,
};
pub use errors::SolarError;
pub use irradiance::{
    day_angle, distance_correction, extraterrestrial_irradiance, SOLAR_CONSTANT,
};
pub use position::{horizontal_position, solar_position_for_series, solar_position_series};
pub use sampling::sample_window;
pub use types::{
    DomainPolicy, IrradianceSeries, SamplingWindow, SiteParameters, SolarSeries, TimeSeries,
};
