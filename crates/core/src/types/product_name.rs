//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductNameError {
    /// The input string is empty or only whitespace.
    #[error("product name cannot be empty")]
    Empty,
}

/// The name of a product in the cart.
///
/// There is no separate product ID: the name is the key of a line item, so two
/// additions with the same name land on the same line.
///
/// ## Constraints
///
/// - Must contain at least one non-whitespace character
/// - Stored exactly as given (no trimming or case folding)
///
/// ## Examples
///
/// ```
/// use corner_shop_core::ProductName;
///
/// assert!(ProductName::parse("Rooibos Tea").is_ok());
/// assert!(ProductName::parse("").is_err());
/// assert!(ProductName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Parse a `ProductName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ProductNameError::Empty`] if the input is empty or blank.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        if s.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductName {
    type Err = ProductNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }
        Ok(Self(s))
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(ProductName::parse("Widget").is_ok());
        assert!(ProductName::parse("Handmade Soap (Lavender)").is_ok());
        assert!(ProductName::parse("x").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductName::parse(""), Err(ProductNameError::Empty));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ProductName::parse(" \t "), Err(ProductNameError::Empty));
    }

    #[test]
    fn test_keeps_surrounding_whitespace() {
        let name = ProductName::parse(" Widget ").unwrap();
        assert_eq!(name.as_str(), " Widget ");
        assert_ne!(name, ProductName::parse("Widget").unwrap());
    }

    #[test]
    fn test_compare_with_str() {
        let name = ProductName::parse("Widget").unwrap();
        assert!(name == *"Widget");
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = ProductName::parse("Widget").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Widget\"");

        let parsed: ProductName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ProductName>("\"\"").is_err());
    }
}
