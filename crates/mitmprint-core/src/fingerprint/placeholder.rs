/// TLS_EMPTY_RENEGOTIATION_INFO_SCSV. Some stacks put it where others put a
/// GREASE value, so it is matched as a placeholder as well.
pub const LEGACY_PLACEHOLDER: u16 = 0x00FF;

/// Check if a u16 value is a GREASE value (RFC 8701).
///
/// GREASE values follow the pattern 0x?A?A where both bytes are identical:
/// 0x0A0A, 0x1A1A, 0x2A2A, ..., 0xFAFA
pub fn is_grease(val: u16) -> bool {
    let hi = (val >> 8) as u8;
    let lo = val as u8;
    hi == lo && (hi & 0x0F) == 0x0A
}

/// Check if a cipher suite or extension value is client-inserted filler
/// rather than a real algorithm: any GREASE value or the legacy SCSV.
pub fn is_placeholder(val: u16) -> bool {
    is_grease(val) || val == LEGACY_PLACEHOLDER
}

/// Filter GREASE values from a slice of u16 values.
pub fn filter_grease(values: &[u16]) -> Vec<u16> {
    values.iter().copied().filter(|v| !is_grease(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grease_values() {
        // All 16 GREASE values
        let grease_values: Vec<u16> = (0..16u16).map(|n| (n << 12) | 0x0A0A | (n << 4)).collect();
        assert_eq!(grease_values[0], 0x0A0A);
        assert_eq!(grease_values[15], 0xFAFA);
        for v in &grease_values {
            assert!(is_grease(*v), "0x{:04X} should be GREASE", v);
            assert!(is_placeholder(*v));
        }
    }

    #[test]
    fn test_non_grease_values() {
        assert!(!is_grease(0x0303)); // TLS 1.2
        assert!(!is_grease(0xC02B)); // TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
        assert!(!is_grease(0x0A1A)); // bytes differ
        assert!(!is_grease(0x0B0B)); // wrong low nibble
        assert!(!is_grease(0x00FF)); // TLS_EMPTY_RENEGOTIATION_INFO_SCSV
    }

    #[test]
    fn test_legacy_placeholder() {
        assert!(is_placeholder(0x00FF));
        assert!(!is_placeholder(0xFF01)); // renegotiation_info extension
        assert!(!is_placeholder(0x1301));
    }

    #[test]
    fn test_filter_grease() {
        let input = vec![0x0A0A, 0x1301, 0x00FF, 0xFAFA, 0xC02B];
        let filtered = filter_grease(&input);
        assert_eq!(filtered, vec![0x1301, 0x00FF, 0xC02B]);
    }
}
