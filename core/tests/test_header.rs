// Header suite: registry verification, wire layout, and short/unknown input.

#[cfg(test)]
mod tests {

use imgmeta_core::{
    constants::{ENVELOPE_HEADER_LEN, ENVELOPE_V1},
    headers::{decode_header_be, encode_header_be, EnvelopeHeader, EnvelopeVersion, HeaderError},
    utils::enum_name_or_hex,
};

// ## 1️⃣ Version registry

    #[test]
    fn version_verify_accepts_known() {
        assert_eq!(EnvelopeVersion::verify(ENVELOPE_V1).unwrap(), EnvelopeVersion::V1);
        assert_eq!(EnvelopeVersion::V1.header_len(), ENVELOPE_HEADER_LEN);
    }

    #[test]
    fn version_verify_rejects_unknown() {
        for raw in [0u8, 2, 0x7F, 0xFF] {
            let err = EnvelopeVersion::verify(raw).unwrap_err();
            assert!(matches!(err, HeaderError::UnsupportedVersion { raw: r } if r == raw));
        }
    }

    #[test]
    fn enum_name_or_hex_formats() {
        assert_eq!(enum_name_or_hex::<EnvelopeVersion>(1), "V1");
        assert_eq!(enum_name_or_hex::<EnvelopeVersion>(0xAB), "0xab");
    }

// ## 2️⃣ Wire layout

    #[test]
    fn encode_writes_fixed_layout() {
        let header = EnvelopeHeader::v1(0x0102_0304, [9, 8, 7, 6, 5, 4, 3, 2]);
        let mut out = vec![0xEE]; // pre-existing bytes are preserved
        let written = encode_header_be(&header, &mut out);

        assert_eq!(written, EnvelopeHeader::LEN_V1);
        assert_eq!(
            out,
            vec![0xEE, 1, 0x01, 0x02, 0x03, 0x04, 9, 8, 7, 6, 5, 4, 3, 2]
        );
    }

    #[test]
    fn decode_reads_back_and_reports_consumed() {
        let header = EnvelopeHeader::v1(1_700_000_060, [0xAA; 8]);
        let mut buf = Vec::new();
        encode_header_be(&header, &mut buf);
        buf.extend_from_slice(b"trailing body");

        let (decoded, consumed) = decode_header_be(&buf).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(consumed, ENVELOPE_HEADER_LEN);
    }

// ## 3️⃣ Short and unknown input

    #[test]
    fn decode_empty_buffer() {
        let err = decode_header_be(&[]).unwrap_err();
        assert!(matches!(err, HeaderError::BufferTooShort { have: 0, need: 1 }));
    }

    #[test]
    fn decode_short_buffer() {
        let err = decode_header_be(&[ENVELOPE_V1, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, HeaderError::BufferTooShort { have: 4, need: ENVELOPE_HEADER_LEN }));
    }

    #[test]
    fn decode_unknown_version_before_length() {
        let err = decode_header_be(&[0x05]).unwrap_err();
        assert!(matches!(err, HeaderError::UnsupportedVersion { raw: 0x05 }));
        assert!(err.to_string().contains("0x5"));
    }

// ## 4️⃣ Expiry

    #[test]
    fn expiry_is_inclusive() {
        let header = EnvelopeHeader::v1(100, [0; 8]);
        assert!(!header.is_expired_at(99));
        assert!(!header.is_expired_at(100));
        assert!(header.is_expired_at(101));
    }
}
