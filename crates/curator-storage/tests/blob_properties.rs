//! Property tests for the feature blob encoding.

use proptest::prelude::*;

use curator_storage::queries::feature_ops::{bytes_to_f32_vec, f32_vec_to_bytes};

proptest! {
    #[test]
    fn prop_blob_roundtrip(row in prop::collection::vec(-1e6f32..1e6, 0..64)) {
        let bytes = f32_vec_to_bytes(&row);
        prop_assert_eq!(bytes.len(), row.len() * 4);
        let back = bytes_to_f32_vec(&bytes, row.len(), 0).unwrap();
        prop_assert_eq!(back, row);
    }

    #[test]
    fn prop_wrong_length_rejected(row in prop::collection::vec(-1.0f32..1.0, 1..16)) {
        let bytes = f32_vec_to_bytes(&row);
        prop_assert!(bytes_to_f32_vec(&bytes, row.len() + 1, 0).is_err());
    }
}
