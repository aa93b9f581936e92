#[cfg(test)]
mod tests {
    use imgmeta_core::audit::{AuditAction, AuditOutcome, AuditRecord, AuditSink, JsonLinesSink, MemorySink, NullSink};

    #[test]
    fn record_json_shape() {
        let rec = AuditRecord::ok(AuditAction::Embed, 42);
        let line = rec.to_json_line().unwrap();
        assert!(line.ends_with('\n'));
        assert!(line.contains("\"action\":\"embed\""));
        assert!(line.contains("\"status\":\"ok\""));
        assert!(line.contains("\"payload_len\":42"));
        assert!(!line.contains("detail"));

        let back: AuditRecord = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn failed_record_carries_kind_and_detail() {
        let rec = AuditRecord::failed(AuditAction::Open, "expired", "token expired at 10 (now 11)");
        assert!(!rec.is_ok());
        assert_eq!(rec.outcome, AuditOutcome::Failed { kind: "expired".into() });
        assert_eq!(rec.payload_len, None);

        let line = rec.to_json_line().unwrap();
        assert!(line.contains("\"status\":\"failed\""));
        assert!(line.contains("\"kind\":\"expired\""));
    }

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.record(&AuditRecord::ok(AuditAction::Seal, 1)).unwrap();
        sink.record(&AuditRecord::ok(AuditAction::Open, 1).with_detail("second")).unwrap();

        let records = sink.records();
        assert_eq!(sink.len(), 2);
        assert_eq!(records[0].action, AuditAction::Seal);
        assert_eq!(records[1].detail.as_deref(), Some("second"));
    }

    #[test]
    fn null_sink_accepts_everything() {
        NullSink.record(&AuditRecord::ok(AuditAction::Extract, 0)).unwrap();
    }

    #[test]
    fn json_lines_sink_appends_across_opens() {
        let path = std::env::temp_dir().join(format!("imgmeta-{}-sink.jsonl", std::process::id()));
        std::fs::remove_file(&path).ok();

        JsonLinesSink::open(&path).unwrap().record(&AuditRecord::ok(AuditAction::Seal, 3)).unwrap();
        let sink = JsonLinesSink::open(&path).unwrap();
        assert_eq!(sink.path(), path.as_path());
        sink.record(&AuditRecord::failed(AuditAction::Open, "integrity_failure", "tag")).unwrap();

        let records = JsonLinesSink::replay(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        assert!(!records[1].is_ok());
    }

    #[test]
    fn replay_rejects_corrupt_lines() {
        let path = std::env::temp_dir().join(format!("imgmeta-{}-corrupt.jsonl", std::process::id()));
        std::fs::write(&path, "{ not a record }\n").unwrap();
        let err = JsonLinesSink::replay(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
