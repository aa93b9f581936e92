#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use imgmeta_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        let mut c = TelemetryCounters::default();
        c.add_seal(100, 200);
        c.add_seal(50, 100);
        c.add_open();
        c.add_embed(2);
        c.add_extract(false);
        c.add_extract(true);
        c.add_failure();
        c
    }

    #[test]
    fn counters_accumulate() {
        let c = make_counters();
        assert_eq!(c.tokens_sealed, 2);
        assert_eq!(c.bytes_sealed, 150);
        assert_eq!(c.bytes_token, 300);
        assert_eq!(c.tokens_opened, 1);
        assert_eq!(c.payloads_embedded, 1);
        assert_eq!(c.bits_embedded, 32 + 16);
        assert_eq!(c.payloads_extracted, 2);
        assert_eq!(c.truncated_extractions, 1);
        assert_eq!(c.failures, 1);
    }

    #[test]
    fn counters_merge_and_add_assign_agree() {
        let mut a = make_counters();
        a.merge(&make_counters());

        let mut b = make_counters();
        b += make_counters();

        assert_eq!(a, b);
        assert_eq!(a.tokens_sealed, 4);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Seal, Duration::from_millis(2));
        times.add(Stage::Seal, Duration::from_millis(3));
        times.add(Stage::Embed, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Seal), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Open), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(6));
        assert!(times.has_all(&[Stage::Seal, Stage::Embed]));
        assert!(!times.has_all(&[Stage::Extract]));
        assert_eq!(times.get_us(Stage::Embed), 1000.0);
    }

    #[test]
    fn timer_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Decode, || {
            std::thread::sleep(Duration::from_millis(5));
            7
        });
        assert_eq!(out, 7);
        assert!(timer.stage_times.get(Stage::Decode) >= Duration::from_millis(5));
        assert!(timer.elapsed() >= timer.stage_times.total());
    }

    #[test]
    fn snapshot_computes_token_expansion() {
        let timer = TelemetryTimer::new();
        let snap = TelemetrySnapshot::from(&make_counters(), &timer);
        assert!((snap.token_expansion - 2.0).abs() < f64::EPSILON);
        assert!(snap.sanity_check());

        let empty = TelemetrySnapshot::from(&TelemetryCounters::default(), &timer);
        assert_eq!(empty.token_expansion, 0.0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Open, Duration::from_micros(10));
        let snap = TelemetrySnapshot::from(&make_counters(), &timer);

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"tokens_sealed\":2"));
        assert!(json.contains("Open"));

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, snap.counters);
    }

    #[test]
    fn stage_display_names() {
        let names: Vec<String> = [Stage::Seal, Stage::Open, Stage::Embed, Stage::Extract, Stage::Decode, Stage::Encode]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, ["seal", "open", "embed", "extract", "decode", "encode"]);
    }
}
