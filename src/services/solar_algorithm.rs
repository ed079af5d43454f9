/// ============================================================
///  Clear-Sky Solar Irradiance Formulae
///
///  Algorithm pipeline:
///   1. Solar geometry – declination, hour angle, elevation angle
///   2. Air mass       – relative optical path length through the
///                       atmosphere, 1 / (1e-4 + cos(zenith))
///   3. Irradiance     – 1353 · (0.7^AM)^0.678 W/m², with readings
///                       above 1100 W/m² discarded as outliers
/// ============================================================

use std::f64::consts::PI;

// ─── Physical constants ──────────────────────────────────────
const SC: f64 = 1353.0; // Solar constant W/m²
const DEG: f64 = PI / 180.0;
const TRANSMITTANCE: f64 = 0.7; // clear-sky atmospheric transmittance
const EXTINCTION_EXPONENT: f64 = 0.678; // empirical optical-depth correction
/// Readings above this limit are treated as outliers and reported as zero.
const OUTLIER_LIMIT_W_M2: f64 = 1100.0;

/// Solar declination (degrees) for a day of the year (1–366).
pub fn declination_angle(day_of_year: u32) -> f64 {
    23.45 * ((360.0 / 365.0) * (day_of_year as f64 - 81.0) * DEG).sin()
}

/// Hour angle (degrees) for a fractional hour of the day: zero at solar
/// noon, −180° at 0h, +180° at 24h.
pub fn hour_angle(hour: f64) -> f64 {
    15.0 * (hour - 12.0)
}

/// Solar elevation above the horizon (radians). All arguments in radians.
pub fn elevation_angle(hour_angle: f64, declination: f64, latitude: f64) -> f64 {
    (declination.sin() * latitude.sin() + declination.cos() * latitude.cos() * hour_angle.cos())
        .asin()
}

/// Relative air mass for a fractional hour, day of year and latitude
/// (latitude in **radians**). The 1e-4 term keeps the ratio finite with
/// the sun exactly on the horizon.
pub fn air_mass(hour: f64, day_of_year: u32, latitude: f64) -> f64 {
    let declination = declination_angle(day_of_year) * DEG;
    let omega = hour_angle(hour) * DEG;
    let elevation = elevation_angle(omega, declination, latitude);
    let zenith = PI / 2.0 - elevation;
    1.0 / (1e-4 + zenith.cos())
}

/// Clear-sky irradiance (W/m²) for a given air mass:
/// `1353 · (0.7^AM)^0.678`, zero when the raw value crosses the outlier
/// limit.
pub fn clear_sky_irradiance(air_mass: f64) -> f64 {
    let base = TRANSMITTANCE.powf(air_mass);
    let raw = SC * base.powf(EXTINCTION_EXPONENT);
    if raw > OUTLIER_LIMIT_W_M2 { 0.0 } else { raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declination_bounded_all_year() {
        for day in 1..=366 {
            let d = declination_angle(day);
            assert!(
                (-23.45..=23.45).contains(&d),
                "Declination out of range on day {}: {:.3}",
                day,
                d
            );
        }
    }

    #[test]
    fn test_declination_equinox_and_solstices() {
        assert!(
            declination_angle(81).abs() < 1e-9,
            "Declination should cross zero at the spring equinox"
        );
        let summer = declination_angle(172);
        assert!(
            (summer - 23.45).abs() < 0.1,
            "Summer solstice declination should sit near +23.45°, got {:.2}",
            summer
        );
        let winter = declination_angle(355);
        assert!(
            (winter + 23.45).abs() < 0.1,
            "Winter solstice declination should sit near −23.45°, got {:.2}",
            winter
        );
    }

    #[test]
    fn test_hour_angle_fixed_points() {
        assert_eq!(hour_angle(12.0), 0.0, "Hour angle must vanish at solar noon");
        assert_eq!(hour_angle(0.0), -180.0);
        assert_eq!(hour_angle(24.0), 180.0);
    }

    #[test]
    fn test_air_mass_minimal_at_equinox_noon() {
        // Equator at the equinox: the sun passes through the zenith at noon
        let noon = air_mass(12.0, 81, 0.0);
        assert!(
            (noon - 1.0).abs() < 1e-3,
            "Overhead air mass should be ~1, got {:.5}",
            noon
        );
        let mut previous = noon;
        for h in [13.0, 14.0, 15.0, 16.0, 17.0] {
            let am = air_mass(h, 81, 0.0);
            assert!(
                am > previous,
                "Air mass should grow away from noon: {:.4} at {}h vs {:.4}",
                am,
                h,
                previous
            );
            previous = am;
        }
    }

    #[test]
    fn test_air_mass_symmetric_around_noon() {
        let morning = air_mass(9.0, 81, 0.0);
        let afternoon = air_mass(15.0, 81, 0.0);
        assert!(
            (morning - afternoon).abs() < 1e-9,
            "Air mass should be symmetric around solar noon: {:.6} vs {:.6}",
            morning,
            afternoon
        );
    }

    #[test]
    fn test_irradiance_at_unit_air_mass() {
        let w = clear_sky_irradiance(1.0);
        assert!(
            (w - 1062.4).abs() < 0.5,
            "AM1 irradiance should be ≈1062 W/m², got {:.1}",
            w
        );
    }

    #[test]
    fn test_outlier_clamp_boundary() {
        // The raw formula value crosses 1100 W/m² near AM ≈ 0.856
        assert_eq!(
            clear_sky_irradiance(0.84),
            0.0,
            "Raw ≈1104 W/m² lies above the outlier limit and must report zero"
        );
        let below = clear_sky_irradiance(0.87);
        assert!(
            below > 1090.0 && below <= 1100.0,
            "Raw just under the limit should pass through, got {:.1}",
            below
        );
        assert_eq!(
            clear_sky_irradiance(0.5),
            0.0,
            "Values far above the limit also report zero"
        );
    }

    #[test]
    fn test_summer_noon_mid_latitude() {
        // 40°N at solar noon on the summer solstice (day 172)
        let am = air_mass(12.0, 172, 40.0_f64.to_radians());
        assert!(
            am > 1.0 && am < 1.1,
            "Near-overhead air mass expected, got {:.4}",
            am
        );
        let w = clear_sky_irradiance(am);
        assert!(
            w > 900.0 && w < 1100.0,
            "Clear-sky noon irradiance should sit in the typical peak range, got {:.1}",
            w
        );
        println!("Summer noon 40°N: AM={:.4} irradiance={:.1} W/m²", am, w);
    }
}
