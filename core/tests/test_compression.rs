#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use imgmeta_core::{
        compression::{codec_for_version, create_compressor, create_decompressor, resolve, CompressionError},
        constants::codec_ids,
        headers::EnvelopeVersion,
    };

    fn zlib_round_trip(input: &[u8], level: Option<u32>) -> Vec<u8> {
        let mut packed = Vec::new();
        create_compressor(codec_ids::ZLIB, level).unwrap().compress(input, &mut packed).unwrap();

        let mut out = Vec::new();
        create_decompressor(codec_ids::ZLIB, None).unwrap().decompress(&packed, &mut out).unwrap();
        out
    }

    #[test]
    fn v1_envelopes_use_zlib() {
        assert_eq!(codec_for_version(EnvelopeVersion::V1), codec_ids::ZLIB);
        assert_eq!(resolve(codec_ids::ZLIB).unwrap().name, "zlib");
    }

    #[test]
    fn zlib_round_trip_across_levels() {
        let input = b"device=cam-04;ts=1700000000;".repeat(50);
        for level in [None, Some(0), Some(1), Some(9), Some(42)] {
            assert_eq!(zlib_round_trip(&input, level), input);
        }
    }

    #[test]
    fn compressed_output_has_zlib_header() {
        let mut packed = Vec::new();
        create_compressor(codec_ids::ZLIB, None).unwrap().compress(b"abc", &mut packed).unwrap();
        assert_eq!(packed[0] & 0x0F, 8); // deflate method
        assert_eq!(((packed[0] as u16) << 8 | packed[1] as u16) % 31, 0);
    }

    #[test]
    fn compress_appends_to_existing_output() {
        let mut out = b"prefix".to_vec();
        create_compressor(codec_ids::ZLIB, None).unwrap().compress(b"abc", &mut out).unwrap();
        assert!(out.starts_with(b"prefix"));
        assert!(out.len() > 6);
    }

    #[test]
    fn unknown_codec_is_rejected() {
        assert!(matches!(resolve(0x0099), Err(CompressionError::UnsupportedCodec { codec_id: 0x0099 })));
        assert!(create_compressor(0x0099, None).is_err());
        assert!(create_decompressor(0x0099, None).is_err());
    }

    #[test]
    fn garbage_stream_fails() {
        let mut out = Vec::new();
        let err = create_decompressor(codec_ids::ZLIB, None)
            .unwrap()
            .decompress(&[0xFF; 16], &mut out)
            .unwrap_err();
        assert!(matches!(err, CompressionError::CodecProcessFailed { .. }));
    }

    #[test]
    fn inflate_limit_is_enforced() {
        let mut packed = Vec::new();
        create_compressor(codec_ids::ZLIB, None).unwrap().compress(&[0u8; 11], &mut packed).unwrap();

        let mut out = Vec::new();
        let err = create_decompressor(codec_ids::ZLIB, Some(10))
            .unwrap()
            .decompress(&packed, &mut out)
            .unwrap_err();
        assert!(matches!(err, CompressionError::OutputTooLarge { max: 10 }));
        assert!(out.is_empty());

        // Exactly at the limit is fine.
        let mut out = Vec::new();
        create_decompressor(codec_ids::ZLIB, Some(11)).unwrap().decompress(&packed, &mut out).unwrap();
        assert_eq!(out, vec![0u8; 11]);
    }

    proptest! {
        #[test]
        fn prop_zlib_round_trip(input in proptest::collection::vec(any::<u8>(), 0..4096)) {
            prop_assert_eq!(zlib_round_trip(&input, None), input);
        }
    }
}
