use crate::types::{IrradianceSeries, TimeSeries};

/// Solar constant, W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Angular position of Earth in its orbit for a 1-based day of year,
/// radians in roughly [0, 2π).
pub fn day_angle(day_of_year: u32) -> f64 {
    2.0 * std::f64::consts::PI * day_of_year as f64 / 365.25
}

/// Earth-Sun distance correction to the solar constant.
pub fn distance_correction(day_angle: f64) -> f64 {
    1.0 + 0.03344 * (day_angle - 0.048869).cos()
}

/// Per-sample day angle and top-of-atmosphere irradiance. The irradiance is
/// not consumed by the position solver but is exposed for radiation models.
pub fn extraterrestrial_irradiance(series: &TimeSeries) -> IrradianceSeries {
    let day_angle: Vec<f64> = series.day_of_year.iter().map(|&d| day_angle(d)).collect();
    let irradiance = day_angle
        .iter()
        .map(|&j| SOLAR_CONSTANT * distance_correction(j))
        .collect();
    IrradianceSeries {
        day_angle,
        irradiance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_stays_within_orbital_eccentricity_band() {
        for doy in 1..=366 {
            let e = distance_correction(day_angle(doy));
            assert!((0.96..=1.04).contains(&e), "doy {doy}: {e}");
        }
    }

    #[test]
    fn irradiance_peaks_near_perihelion() {
        let january = SOLAR_CONSTANT * distance_correction(day_angle(3));
        let july = SOLAR_CONSTANT * distance_correction(day_angle(185));
        assert!(january > SOLAR_CONSTANT);
        assert!(july < SOLAR_CONSTANT);
    }
}
