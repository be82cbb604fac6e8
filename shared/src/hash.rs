/// Deterministic 32-bit label hash (`h * 31 + c` over UTF-16 code units,
/// wrapping after every step).
///
/// Only used to bucket labels into a palette; not a general purpose hash.
pub fn label_hash(label: &str) -> i32 {
    label.encode_utf16().fold(0i32, |acc, unit| {
        (acc << 5).wrapping_sub(acc).wrapping_add(i32::from(unit))
    })
}

/// Index into a palette of `len` entries: `|hash| mod len`.
///
/// Works on the unsigned magnitude so `i32::MIN` cannot overflow.
/// Returns `None` for an empty palette.
pub fn palette_index(hash: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(hash.unsigned_abs() as usize % len)
}

#[cfg(test)]
mod tests {
    use super::{label_hash, palette_index};

    #[test]
    fn empty_label_hashes_to_zero() {
        assert_eq!(label_hash(""), 0);
    }

    #[test]
    fn single_char_is_its_code() {
        assert_eq!(label_hash("a"), 97);
        assert_eq!(label_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(label_hash("microsoft.com"), label_hash("microsoft.com"));
    }

    #[test]
    fn known_values_match_reference_hash() {
        // Values produced by the `((h << 5) - h + c) | 0` string hash.
        assert_eq!(label_hash("hello"), 99_162_322);
        assert_eq!(label_hash("qq.com"), -954_046_285);
    }

    #[test]
    fn long_labels_wrap_instead_of_overflowing() {
        let label = "apd-pcdnwxnat.teg.tencent-cloud.net".repeat(8);
        let first = label_hash(&label);
        assert_eq!(first, label_hash(&label));
    }

    #[test]
    fn different_labels_usually_differ() {
        assert_ne!(label_hash("baidu.com"), label_hash("google.com"));
    }

    #[test]
    fn non_ascii_labels_hash_by_utf16_units() {
        // U+6392 and U+540D
        let expected = 0x6392i32.wrapping_mul(31).wrapping_add(0x540D);
        assert_eq!(label_hash("排名"), expected);
    }

    #[test]
    fn palette_index_handles_min_value() {
        let idx = palette_index(i32::MIN, 18).unwrap();
        assert!(idx < 18);
        assert_eq!(idx, (2_147_483_648u64 % 18) as usize);
    }

    #[test]
    fn palette_index_uses_magnitude() {
        assert_eq!(palette_index(-7, 5), Some(2));
        assert_eq!(palette_index(7, 5), Some(2));
        assert_eq!(palette_index(0, 5), Some(0));
    }

    #[test]
    fn palette_index_rejects_empty_palette() {
        assert_eq!(palette_index(42, 0), None);
    }
}
