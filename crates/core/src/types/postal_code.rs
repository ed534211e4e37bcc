//! Postal code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A postal code as supplied by the client.
///
/// No validation is performed: the value is forwarded to the geocoding API
/// and written to the access log exactly as received. An empty postal code
/// is a legal (if meaningless) value.
///
/// ## Examples
///
/// ```
/// use postal_lookup_core::PostalCode;
///
/// let code = PostalCode::new("1000001");
/// assert_eq!(code.as_str(), "1000001");
/// assert!(PostalCode::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Wrap a raw postal code string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the postal code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PostalCode` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if no postal code was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostalCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for PostalCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PostalCode {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PostalCode {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PostalCode {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_postal_code_is_allowed() {
        let code = PostalCode::new("");
        assert!(code.is_empty());
        assert_eq!(code, PostalCode::default());
    }

    #[test]
    fn test_postal_code_passes_through_unchanged() {
        let code = PostalCode::from(" 100-0001 ");
        assert_eq!(code.as_str(), " 100-0001 ");
        assert_eq!(code.to_string(), " 100-0001 ");
    }

    #[test]
    fn test_serde_transparent() {
        let code = PostalCode::new("1500001");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"1500001\"");

        let parsed: PostalCode = serde_json::from_str("\"1000001\"").unwrap();
        assert_eq!(parsed.into_inner(), "1000001");
    }
}
