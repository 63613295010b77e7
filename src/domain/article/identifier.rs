//! Fixed-width version identifiers.
//!
//! A token is the article id zero-padded to [`ARTICLE_ID_WIDTH`] digits followed by the version
//! number zero-padded to [`VERSION_NUMBER_WIDTH`] digits. Changing either width is a breaking
//! change of the wire format.
use crate::domain::article::value_objects::{ArticleId, VersionNumber};
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub const ARTICLE_ID_WIDTH: usize = 15;
pub const VERSION_NUMBER_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {value} does not fit in {width} digits")]
pub struct EncodingError {
    pub field: &'static str,
    pub value: u64,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("identifier must be {expected} characters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("identifier must contain only decimal digits")]
    NonNumeric,
    #[error("identifier names article {article_id} version {version}, which cannot exist")]
    OutOfRange { article_id: u64, version: u64 },
}

/// Encoder/decoder for identifier tokens. Both directions share the same widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierCodec {
    article_width: usize,
    version_width: usize,
}

impl Default for IdentifierCodec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl IdentifierCodec {
    pub const STANDARD: Self = Self {
        article_width: ARTICLE_ID_WIDTH,
        version_width: VERSION_NUMBER_WIDTH,
    };

    pub const fn new(article_width: usize, version_width: usize) -> Self {
        Self {
            article_width,
            version_width,
        }
    }

    pub fn token_len(&self) -> usize {
        self.article_width + self.version_width
    }

    pub fn encode(&self, article_id: u64, version: u64) -> Result<String, EncodingError> {
        let article = Self::pad("article id", article_id, self.article_width)?;
        let version = Self::pad("version number", version, self.version_width)?;
        Ok(article + &version)
    }

    /// Total over arbitrary input: every malformed token yields an [`InvalidIdentifier`].
    pub fn decode(&self, token: &str) -> Result<(u64, u64), InvalidIdentifier> {
        if token.len() != self.token_len() {
            return Err(InvalidIdentifier::WrongLength {
                expected: self.token_len(),
                actual: token.len(),
            });
        }
        // `u64::from_str` accepts a leading '+', so check the digits explicitly.
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidIdentifier::NonNumeric);
        }

        let (article, version) = token.split_at(self.article_width);
        let article = article
            .parse::<u64>()
            .map_err(|_| InvalidIdentifier::NonNumeric)?;
        let version = version
            .parse::<u64>()
            .map_err(|_| InvalidIdentifier::NonNumeric)?;
        Ok((article, version))
    }

    fn pad(field: &'static str, value: u64, width: usize) -> Result<String, EncodingError> {
        let digits = value.to_string();
        if digits.len() > width {
            return Err(EncodingError {
                field,
                value,
                width,
            });
        }
        Ok(format!("{digits:0>width$}"))
    }
}

/// Composite key of a version: the article it belongs to and its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentifier {
    article_id: ArticleId,
    version: VersionNumber,
    token: String,
}

impl VersionIdentifier {
    pub fn new(article_id: ArticleId, version: VersionNumber) -> Result<Self, EncodingError> {
        let raw_article = u64::try_from(i64::from(article_id)).map_err(|_| EncodingError {
            field: "article id",
            value: 0,
            width: ARTICLE_ID_WIDTH,
        })?;
        let token = IdentifierCodec::STANDARD.encode(raw_article, version.get())?;
        Ok(Self {
            article_id,
            version,
            token,
        })
    }

    pub fn parse(token: &str) -> Result<Self, InvalidIdentifier> {
        let (article, version) = IdentifierCodec::STANDARD.decode(token)?;
        let out_of_range = || InvalidIdentifier::OutOfRange {
            article_id: article,
            version,
        };
        let article_id = i64::try_from(article)
            .ok()
            .and_then(|id| ArticleId::new(id).ok())
            .ok_or_else(out_of_range)?;
        let number = VersionNumber::new(version).map_err(|_| out_of_range())?;
        Ok(Self {
            article_id,
            version: number,
            token: token.to_owned(),
        })
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub fn version(&self) -> VersionNumber {
        self.version
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl From<EncodingError> for DomainError {
    fn from(err: EncodingError) -> Self {
        DomainError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(article: i64, version: u64) -> VersionIdentifier {
        VersionIdentifier::new(
            ArticleId::new(article).unwrap(),
            VersionNumber::new(version).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn encode_pads_both_fields() {
        let token = IdentifierCodec::STANDARD.encode(1, 2).unwrap();
        assert_eq!(token, "0000000000000010000000002");
        assert_eq!(token.len(), 25);
    }

    #[test]
    fn decode_reverses_encode_at_width_boundaries() {
        let codec = IdentifierCodec::STANDARD;
        for (article, version) in [
            (0, 0),
            (1, 1),
            (42, 9_999_999_999),
            (999_999_999_999_999, 1),
        ] {
            let token = codec.encode(article, version).unwrap();
            assert_eq!(codec.decode(&token), Ok((article, version)));
        }
    }

    #[test]
    fn encode_rejects_values_wider_than_field() {
        let codec = IdentifierCodec::STANDARD;
        let err = codec.encode(1_000_000_000_000_000, 1).unwrap_err();
        assert_eq!(err.field, "article id");
        let err = codec.encode(1, 10_000_000_000).unwrap_err();
        assert_eq!(err.field, "version number");
        assert_eq!(err.width, VERSION_NUMBER_WIDTH);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let codec = IdentifierCodec::STANDARD;
        assert!(matches!(
            codec.decode(""),
            Err(InvalidIdentifier::WrongLength { actual: 0, .. })
        ));
        assert!(matches!(
            codec.decode("00000000000000100000000020"),
            Err(InvalidIdentifier::WrongLength { .. })
        ));
    }

    #[test]
    fn decode_rejects_non_digits() {
        let codec = IdentifierCodec::STANDARD;
        for token in [
            "00000000000000a0000000002",
            "+000000000000010000000002",
            "000000000000001 000000002",
            "-000000000000010000000002",
        ] {
            assert_eq!(codec.decode(token), Err(InvalidIdentifier::NonNumeric), "{token}");
        }
    }

    #[test]
    fn decode_handles_multibyte_input_without_panicking() {
        let codec = IdentifierCodec::STANDARD;
        // 25 bytes but not 25 ASCII digits; splitting at a char boundary would panic.
        let token = "ééééééééééééa";
        assert_eq!(token.len(), 25);
        assert_eq!(codec.decode(token), Err(InvalidIdentifier::NonNumeric));
    }

    #[test]
    fn custom_widths_are_honoured() {
        let codec = IdentifierCodec::new(3, 2);
        assert_eq!(codec.encode(7, 5).unwrap(), "00705");
        assert_eq!(codec.decode("12399"), Ok((123, 99)));
        assert!(codec.encode(1000, 1).is_err());
    }

    #[test]
    fn version_identifier_parse_round_trips() {
        let original = id(1, 2);
        assert_eq!(original.as_str(), "0000000000000010000000002");
        let parsed = VersionIdentifier::parse(original.as_str()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.article_id(), ArticleId::new(1).unwrap());
        assert_eq!(parsed.version().get(), 2);
    }

    #[test]
    fn version_identifier_rejects_zero_components() {
        assert!(matches!(
            VersionIdentifier::parse("0000000000000000000000001"),
            Err(InvalidIdentifier::OutOfRange { article_id: 0, .. })
        ));
        assert!(matches!(
            VersionIdentifier::parse("0000000000000010000000000"),
            Err(InvalidIdentifier::OutOfRange { version: 0, .. })
        ));
    }

    #[test]
    fn version_identifier_new_rejects_oversized_article() {
        let article = ArticleId::new(1_000_000_000_000_000).unwrap();
        assert!(VersionIdentifier::new(article, VersionNumber::FIRST).is_err());
    }
}
