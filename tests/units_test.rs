#[cfg(test)]
mod tests {
    use crate::hrtime::HrTime;
    use crate::units::{bundle, convert, format_human, Measurement, TimeUnit};

    #[test]
    fn test_hrtime_is_identity() {
        let t = HrTime::new(4, 2);
        assert_eq!(convert(t, TimeUnit::HrTime), Measurement::HrTime(t));
    }

    #[test]
    fn test_nanoseconds_are_exact() {
        let t = HrTime::new(3, 7);
        assert_eq!(convert(t, TimeUnit::Nanoseconds), Measurement::Nanoseconds(3_000_000_007));
    }

    #[test]
    fn test_milliseconds() {
        let t = HrTime::new(0, 500_000_000);
        assert_eq!(convert(t, TimeUnit::Milliseconds), Measurement::Milliseconds(500.0));
    }

    #[test]
    fn test_seconds() {
        let t = HrTime::new(2, 250_000_000);
        assert_eq!(convert(t, TimeUnit::Seconds), Measurement::Seconds(2.25));
    }

    #[test]
    fn test_string_above_thousand_seconds() {
        assert_eq!(format_human(HrTime::new(1500, 0)), "1.500 sec");
    }

    #[test]
    fn test_string_keeps_msec_label_and_unpadded_nanos() {
        assert_eq!(format_human(HrTime::new(5, 250)), "5.250 msec");
        assert_eq!(
            convert(HrTime::new(1000, 0), TimeUnit::String),
            Measurement::Text("1000.0 msec".to_string())
        );
    }

    #[test]
    fn test_all_bundles_every_representation() {
        let t = HrTime::new(1, 500_000_000);
        match convert(t, TimeUnit::All) {
            Measurement::All(b) => {
                assert_eq!(b.hrtime, t);
                assert_eq!(b.nanoseconds, 1_500_000_000);
                assert_eq!(b.milliseconds, 1500.0);
                assert_eq!(b.seconds, 1.5);
                assert_eq!(b.text, "1.500000000 msec");
            }
            other => panic!("expected bundle, got {:?}", other),
        }
        assert_eq!(bundle(t).nanoseconds, t.as_nanos());
    }

    #[test]
    fn test_unit_names_round_trip() {
        for unit in [
            TimeUnit::HrTime,
            TimeUnit::Nanoseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::String,
            TimeUnit::All,
        ] {
            assert_eq!(TimeUnit::parse_lenient(unit.as_str()), unit);
        }
    }

    #[test]
    fn test_unknown_unit_falls_back_to_all() {
        assert_eq!(TimeUnit::parse_lenient("fortnights"), TimeUnit::All);
        let parsed: Result<TimeUnit, std::convert::Infallible> = "".parse();
        assert_eq!(parsed, Ok(TimeUnit::All));
        let parsed: TimeUnit = serde_json::from_str("\"furlongs\"").unwrap();
        assert_eq!(parsed, TimeUnit::All);
    }

    #[test]
    fn test_default_unit_is_milliseconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_measurement_json() {
        assert_eq!(Measurement::Milliseconds(1.5).to_json().unwrap(), "1.5");
        assert_eq!(Measurement::Text("5.250 msec".into()).to_json().unwrap(), "\"5.250 msec\"");
        assert_eq!(Measurement::HrTime(HrTime::new(1, 2)).to_json().unwrap(), "[1,2]");
        let json = convert(HrTime::new(0, 1_000_000), TimeUnit::All).to_json().unwrap();
        assert!(json.contains("\"milliseconds\":1.0"));
        assert!(json.contains("\"hrtime\":[0,1000000]"));
    }

    #[test]
    fn test_measurement_reports_its_unit() {
        for unit in [TimeUnit::Seconds, TimeUnit::String, TimeUnit::All] {
            assert_eq!(convert(HrTime::ZERO, unit).unit(), unit);
        }
    }
}
