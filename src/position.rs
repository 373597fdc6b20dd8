use crate::angles::{
    checked_unit, declination, deg_to_rad, hour_angle, rad_to_deg, DirectionCosines,
};
use crate::errors::SolarError;
use crate::irradiance::day_angle;
use crate::sampling::sample_window;
use crate::types::{DomainPolicy, SamplingWindow, SiteParameters, SolarSeries, TimeSeries};

/// Computes altitude and azimuth (degrees) for each sample of an aligned
/// day-angle / fractional-hour pair of sequences.
///
/// The two input slices must have equal length; output order matches input
/// order. Azimuth is the single arc-cosine branch in [0°, 180°] — see
/// [`SolarSeries`].
pub fn horizontal_position(
    day_angles: &[f64],
    latitude_deg: f64,
    fractional_hours: &[f64],
    policy: DomainPolicy,
) -> Result<SolarSeries, SolarError> {
    debug_assert_eq!(day_angles.len(), fractional_hours.len());

    let latitude = deg_to_rad(latitude_deg);
    let mut altitude = Vec::with_capacity(day_angles.len());
    let mut azimuth = Vec::with_capacity(day_angles.len());

    for (&j, &t_h) in day_angles.iter().zip(fractional_hours) {
        let dec = declination(j);
        let c = DirectionCosines::new(latitude, dec);

        let t = hour_angle(t_h);
        let (sin_t, cos_t) = t.sin_cos();

        let sin_h0 = c.c31 * cos_t + c.c33;
        let h0 = checked_unit(sin_h0, "sin(h0)", policy)?.asin();

        let num = c.c11 * cos_t + c.c13;
        let denom = (num * num + (c.c22 * sin_t).powi(2)).sqrt();
        // denom vanishes only when the sun sits exactly on the zenith axis;
        // the resulting 0/0 surfaces as a Domain error under either policy.
        let cos_a0 = checked_unit(num / denom, "cos(A0)", policy)?;
        let a0 = cos_a0.acos();

        altitude.push(rad_to_deg(h0));
        azimuth.push(rad_to_deg(a0));
    }

    Ok(SolarSeries { altitude, azimuth })
}

/// Convenience entry point: samples the window, derives day angles and runs
/// the solver for the site's latitude. Output length equals the sampled
/// series length; an empty window yields empty outputs.
pub fn solar_position_series(
    site: &SiteParameters,
    window: &SamplingWindow,
    policy: DomainPolicy,
) -> Result<SolarSeries, SolarError> {
    let series = sample_window(window);
    solar_position_for_series(site, &series, policy)
}

/// Same as [`solar_position_series`] for a pre-built time series.
pub fn solar_position_for_series(
    site: &SiteParameters,
    series: &TimeSeries,
    policy: DomainPolicy,
) -> Result<SolarSeries, SolarError> {
    let day_angles: Vec<f64> = series.day_of_year.iter().map(|&d| day_angle(d)).collect();
    horizontal_position(&day_angles, site.latitude, &series.fractional_hour, policy)
}
