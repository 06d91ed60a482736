use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0b]), "0b");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xca, 0xfe, 0xba, 0xbe]), "cafebabe");
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn generate_is_24_chars() {
    assert_eq!(generate().len(), 24);
}

#[test]
fn generate_is_all_hex() {
    assert!(generate().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_two_calls_differ() {
    assert_ne!(generate(), generate());
}

#[test]
fn generate_is_valid() {
    assert!(is_valid(&generate()));
}

// =============================================================================
// is_valid
// =============================================================================

#[test]
fn is_valid_accepts_lowercase_hex() {
    assert!(is_valid("5f5f5f5f5f5f5f5f5f5f5f5f"));
}

#[test]
fn is_valid_accepts_uppercase_hex() {
    assert!(is_valid("656D99094E20E227874EAC45"));
}

#[test]
fn is_valid_rejects_short() {
    assert!(!is_valid("5f5f5f"));
}

#[test]
fn is_valid_rejects_long() {
    assert!(!is_valid("5f5f5f5f5f5f5f5f5f5f5f5f5f"));
}

#[test]
fn is_valid_rejects_non_hex() {
    assert!(!is_valid("zzzzzzzzzzzzzzzzzzzzzzzz"));
}

#[test]
fn is_valid_rejects_empty() {
    assert!(!is_valid(""));
}
