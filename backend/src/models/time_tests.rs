#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Utc};

    use crate::error::ChartError;
    use crate::models::time::{
        fixed_offset, normalize, parse_birth_date, parse_birth_time, JulianDay, NormalizedInstant,
    };

    #[test]
    fn test_julian_day_j2000() {
        let jd = JulianDay::from_calendar(2000, 1, 1, 12.0);
        assert_eq!(jd, JulianDay::J2000);
    }

    #[test]
    fn test_julian_day_reference_dates() {
        // 1957-10-04 19:26:24 UT (Sputnik 1)
        let jd = JulianDay::from_calendar(1957, 10, 4, 19.44);
        assert!((jd.value() - 2_436_116.31).abs() < 1e-9);

        // 1987-04-10 19:21:00 UT
        let jd = JulianDay::from_calendar(1987, 4, 10, 19.0 + 21.0 / 60.0);
        assert!((jd.value() - 2_446_896.306_25).abs() < 1e-9);
    }

    #[test]
    fn test_julian_day_january_uses_previous_year() {
        let dec_31 = JulianDay::from_calendar(1999, 12, 31, 0.0);
        let jan_1 = JulianDay::from_calendar(2000, 1, 1, 0.0);
        let mar_1 = JulianDay::from_calendar(2000, 3, 1, 0.0);
        assert_eq!(jan_1.value() - dec_31.value(), 1.0);
        // 2000 is a Gregorian leap year
        assert_eq!(mar_1.value() - jan_1.value(), 60.0);
    }

    #[test]
    fn test_julian_day_from_datetime_uses_seconds() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 36).unwrap();
        let jd = JulianDay::from_datetime(dt);
        assert!((jd.value() - (2_451_545.0 + 36.0 / 86_400.0)).abs() < 1e-9);
    }

    #[test]
    fn test_julian_day_to_calendar() {
        let (year, month, day, hour) = JulianDay::new(2_436_116.31).to_calendar();
        assert_eq!((year, month, day), (1957, 10, 4));
        assert!((hour - 19.44).abs() < 1e-6);
    }

    #[test]
    fn test_julian_day_to_datetime() {
        let dt = JulianDay::new(2_446_896.306_25).to_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap());
    }

    #[test]
    fn test_julian_day_datetime_roundtrip() {
        let landing = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap();
        let back = JulianDay::from_datetime(landing).to_datetime().unwrap();
        assert_eq!(back, landing);
    }

    #[test]
    fn test_centuries_since_j2000() {
        assert_eq!(JulianDay::J2000.centuries_since_j2000(), 0.0);
        let jd = JulianDay::new(2_451_545.0 + 36_525.0);
        assert!((jd.centuries_since_j2000() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_birth_date() {
        let date = parse_birth_date("1990-07-15").unwrap();
        assert_eq!(date.to_string(), "1990-07-15");
    }

    #[test]
    fn test_parse_birth_date_rejects_other_layouts() {
        for raw in ["2000/01/01", "01-01-2000", "2000-13-01", "2001-02-29", "", "yesterday"] {
            let err = parse_birth_date(raw).unwrap_err();
            assert!(
                matches!(err, ChartError::InvalidDateFormat(_)),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_birth_time() {
        let time = parse_birth_time(Some("06:30")).unwrap();
        assert_eq!((time.hour(), time.minute()), (6, 30));
    }

    #[test]
    fn test_parse_birth_time_unknown_is_noon() {
        for raw in [None, Some(""), Some("   ")] {
            let time = parse_birth_time(raw).unwrap();
            assert_eq!((time.hour(), time.minute()), (12, 0));
        }
    }

    #[test]
    fn test_parse_birth_time_rejects_garbage() {
        for raw in ["25:00", "12:60", "12-30", "12:30:15", "noon"] {
            let err = parse_birth_time(Some(raw)).unwrap_err();
            assert!(
                matches!(err, ChartError::InvalidTimeFormat(_)),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_fixed_offset_fractional_hours() {
        assert_eq!(fixed_offset(5.5).unwrap().local_minus_utc(), 19_800);
        assert_eq!(fixed_offset(-3.75).unwrap().local_minus_utc(), -13_500);
        assert_eq!(fixed_offset(0.0).unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_fixed_offset_out_of_range() {
        for hours in [24.0, -24.0, 100.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                fixed_offset(hours),
                Err(ChartError::InvalidTimezoneOffset(_))
            ));
        }
    }

    #[test]
    fn test_normalized_instant_subtracts_offset() {
        let instant = NormalizedInstant::parse("2000-01-01", Some("03:00"), 5.0).unwrap();
        assert_eq!(
            instant.utc(),
            Utc.with_ymd_and_hms(1999, 12, 31, 22, 0, 0).unwrap()
        );
        assert_eq!(instant.local().hour(), 3);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let a = normalize("1985-11-23", Some("23:59"), -8.0).unwrap();
        let b = normalize("1985-11-23", Some("23:59"), -8.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_missing_time_equals_noon() {
        let unknown = normalize("2000-01-01", None, 0.0).unwrap();
        let noon = normalize("2000-01-01", Some("12:00"), 0.0).unwrap();
        assert_eq!(unknown, noon);
        assert_eq!(noon, JulianDay::J2000);
    }

    #[test]
    fn test_normalize_offset_equivalence() {
        let moscow = normalize("2000-01-01", Some("15:00"), 3.0).unwrap();
        let utc = normalize("2000-01-01", Some("12:00"), 0.0).unwrap();
        assert_eq!(moscow, utc);

        let india = normalize("2000-01-01", Some("17:30"), 5.5).unwrap();
        assert_eq!(india, utc);
    }

    #[test]
    fn test_normalize_offset_crosses_date_line() {
        let jd = normalize("2000-01-01", Some("01:00"), 3.0).unwrap();
        assert_eq!(jd, JulianDay::from_calendar(1999, 12, 31, 22.0));
    }
}
