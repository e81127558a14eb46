use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            other => Err(Error::Config(format!("unsupported record type: {other}"))),
        }
    }
}

/// Identity triple addressing one record set within the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub zone_id: String,
    pub name: String,
    pub record_type: RecordType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_record_type_round_trip() {
        assert_eq!("A".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("AAAA".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::AAAA.to_string(), "AAAA");
    }

    #[test]
    fn test_record_type_rejects_unsupported() {
        let err = "CNAME".parse::<RecordType>().unwrap_err();
        assert_matches!(err, Error::Config(_));
        assert!("a".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_record_key_equality() {
        let key = RecordKey {
            zone_id: "Z123EXAMPLE".to_string(),
            name: "crib.example.com".to_string(),
            record_type: RecordType::A,
        };
        let mut other = key.clone();
        assert_eq!(key, other);

        other.record_type = RecordType::AAAA;
        assert_ne!(key, other);
    }
}
