//! Encoded hash record handling.
//!
//! Record format:
//! ```text
//! pbkdf2$<rounds>$<salt_hex>$<derived_key_hex>
//! ```
//!
//! No escaping is needed: the rounds field is a decimal integer and the
//! remaining fields use the hex alphabet, so no field can contain the
//! separator.

use crate::error::FormatError;

/// Tag identifying the KDF scheme. Only one scheme is currently defined.
pub const ALGORITHM_TAG: &str = "pbkdf2";
/// Field separator.
pub const SEPARATOR: char = '$';

const FIELD_COUNT: usize = 4;

/// A parsed hash record with all components.
///
/// Holds the cost parameter, the salt, and the derived key as they appear
/// in the encoded text. Records are immutable once created; the deriver
/// builds a fresh one per call.
#[derive(Debug)]
pub struct HashRecord {
    rounds: u32,
    salt_hex: String,
    key_hex: String,
}

impl HashRecord {
    /// Creates a new HashRecord from its components.
    pub fn new(rounds: u32, salt_hex: String, key_hex: String) -> Self {
        Self {
            rounds,
            salt_hex,
            key_hex,
        }
    }

    /// Returns the rounds multiplier.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the salt as lowercase hex text.
    pub fn salt_hex(&self) -> &str {
        &self.salt_hex
    }

    /// Returns the derived key as lowercase hex text.
    pub fn key_hex(&self) -> &str {
        &self.key_hex
    }

    /// Decodes the stored key field to raw bytes.
    ///
    /// The key length is not self-describing in the record; callers compare
    /// against a key of known length and treat a mismatch as non-matching.
    pub fn key_bytes(&self) -> Result<Vec<u8>, FormatError> {
        hex::decode(&self.key_hex).map_err(|_| FormatError::InvalidHex("key"))
    }
}

/// Parses an encoded hash record.
///
/// Field lengths are deliberately not validated beyond non-emptiness, so
/// records from deployments with other salt or key sizes still decode. A
/// zero or non-numeric rounds field is rejected here rather than reaching
/// the KDF with an undefined iteration count.
///
/// # Errors
///
/// Returns a [`FormatError`] if:
/// - The field count is not 4
/// - The algorithm tag is not `pbkdf2`
/// - The rounds field is not a decimal integer >= 1
/// - The salt or key field is empty
pub fn parse(record: &str) -> Result<HashRecord, FormatError> {
    let fields: Vec<&str> = record.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount(fields.len()));
    }

    if fields[0] != ALGORITHM_TAG {
        return Err(FormatError::UnknownAlgorithm(fields[0].to_string()));
    }

    let rounds: u32 = fields[1]
        .parse()
        .map_err(|_| FormatError::InvalidRounds(fields[1].to_string()))?;
    if rounds < 1 {
        return Err(FormatError::InvalidRounds(fields[1].to_string()));
    }

    if fields[2].is_empty() {
        return Err(FormatError::EmptyField("salt"));
    }

    if fields[3].is_empty() {
        return Err(FormatError::EmptyField("key"));
    }

    Ok(HashRecord::new(
        rounds,
        fields[2].to_string(),
        fields[3].to_string(),
    ))
}

/// Serializes a HashRecord to its encoded text form.
pub fn serialize(record: &HashRecord) -> String {
    format!(
        "{ALGORITHM_TAG}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
        record.rounds(),
        record.salt_hex(),
        record.key_hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_roundtrip() {
        let record = HashRecord::new(
            10,
            "00112233445566778899aabbccddeeff".to_string(),
            "ab".repeat(64),
        );

        let text = serialize(&record);
        let parsed = parse(&text).unwrap();

        assert_eq!(parsed.rounds(), 10);
        assert_eq!(parsed.salt_hex(), record.salt_hex());
        assert_eq!(parsed.key_hex(), record.key_hex());
    }

    #[test]
    fn parse_wrong_field_count_fails() {
        assert_eq!(
            parse("not-a-valid-record").unwrap_err(),
            FormatError::FieldCount(1)
        );
        assert!(parse("pbkdf2$10$salt").is_err());
        assert!(parse("pbkdf2$10$salt$key$extra").is_err());
    }

    #[test]
    fn parse_unknown_algorithm_fails() {
        assert!(matches!(
            parse("md5$10$aabb$ccdd"),
            Err(FormatError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn parse_non_numeric_rounds_fails() {
        assert!(matches!(
            parse("pbkdf2$abc$aabb$ccdd"),
            Err(FormatError::InvalidRounds(_))
        ));
        assert!(parse("pbkdf2$NaN$aabb$ccdd").is_err());
        assert!(parse("pbkdf2$-1$aabb$ccdd").is_err());
        assert!(parse("pbkdf2$$aabb$ccdd").is_err());
    }

    #[test]
    fn parse_zero_rounds_fails() {
        assert!(matches!(
            parse("pbkdf2$0$aabb$ccdd"),
            Err(FormatError::InvalidRounds(_))
        ));
    }

    #[test]
    fn parse_accepts_leading_zeros_in_rounds() {
        let parsed = parse("pbkdf2$010$aabb$ccdd").unwrap();
        assert_eq!(parsed.rounds(), 10);
    }

    #[test]
    fn parse_empty_salt_or_key_fails() {
        assert_eq!(parse("pbkdf2$10$$ccdd").unwrap_err(), FormatError::EmptyField("salt"));
        assert_eq!(parse("pbkdf2$10$aabb$").unwrap_err(), FormatError::EmptyField("key"));
    }

    #[test]
    fn key_bytes_rejects_bad_hex() {
        let parsed = parse("pbkdf2$10$aabb$not-hex").unwrap();
        assert_eq!(parsed.key_bytes(), Err(FormatError::InvalidHex("key")));
    }

    #[test]
    fn key_bytes_decodes_stored_key() {
        let parsed = parse("pbkdf2$10$aabb$ccddee").unwrap();
        assert_eq!(parsed.key_bytes().unwrap(), vec![0xcc, 0xdd, 0xee]);
    }
}
