use chrono::{Duration, TimeZone, Utc};

use solar_horizon::{
    extraterrestrial_irradiance, sample_window, solar_position_for_series, DomainPolicy,
    SamplingWindow, SiteParameters,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Esch-sur-Alzette region, June solstice day, 63-minute sampling.
    let site = SiteParameters::new(49.515893362462997, 5.9417455789940004, 288.13, 2.39, 278.62)?;
    let window = SamplingWindow {
        start: Utc.with_ymd_and_hms(2017, 6, 21, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2017, 6, 22, 0, 0, 0).unwrap(),
        step: Duration::minutes(63),
    };

    let series = sample_window(&window);
    let irr = extraterrestrial_irradiance(&series);
    let pos = solar_position_for_series(&site, &series, DomainPolicy::Clamp)?;

    println!("=== Sun position profile ===");
    println!(
        "Site: {:.4}°N {:.4}°E, {:.0} m",
        site.latitude, site.longitude, site.elevation
    );
    println!();
    println!("{:>6}  {:>9}  {:>9}  {:>10}", "hour", "altitude", "azimuth", "G0 [W/m²]");
    for i in 0..series.len() {
        println!(
            "{:>6.2}  {:>8.2}°  {:>8.2}°  {:>10.1}",
            series.fractional_hour[i], pos.altitude[i], pos.azimuth[i], irr.irradiance[i]
        );
    }

    Ok(())
}
