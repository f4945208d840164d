//! Identifier kinds and dispatch parsing.

use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::LookupError;

/// The kinds of identifier the lookup catalog understands.
///
/// Each kind maps to one link-catalog builder, except [`Email`] and
/// [`TaxId`], which additionally have live lookup flows (breach
/// verification and registry lookup respectively).
///
/// [`Email`]: IdentifierKind::Email
/// [`TaxId`]: IdentifierKind::TaxId
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString, ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    /// A person's name.
    Name,
    /// An email address.
    Email,
    /// A phone number.
    Phone,
    /// A platform username or handle.
    Username,
    /// A physical street address.
    Address,
    /// A vehicle license plate.
    VehiclePlate,
    /// A domain name or IPv4 address.
    DomainIp,
    /// A judicial process number.
    ProcessNumber,
    /// A photo search term (optionally paired with an image URL).
    Photo,
    /// A national tax ID (CPF).
    TaxId,
}

/// Parses an identifier-kind string (kebab-case, e.g. `"vehicle-plate"`).
///
/// An unrecognized kind yields a typed [`LookupError::UnknownKind`] rather
/// than reaching any builder.
pub fn parse_kind(input: &str) -> Result<IdentifierKind, LookupError> {
    <IdentifierKind as FromStr>::from_str(input.trim())
        .map_err(|_| LookupError::UnknownKind(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_round_trips_through_its_string_form() {
        for kind in IdentifierKind::iter() {
            let parsed = parse_kind(&kind.to_string()).expect("kind string should parse");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_parse_kind_examples() {
        assert_eq!(parse_kind("email").unwrap(), IdentifierKind::Email);
        assert_eq!(
            parse_kind("vehicle-plate").unwrap(),
            IdentifierKind::VehiclePlate
        );
        assert_eq!(parse_kind(" username ").unwrap(), IdentifierKind::Username);
    }

    #[test]
    fn test_parse_kind_rejects_unknown() {
        let err = parse_kind("dna-sample").unwrap_err();
        assert_eq!(
            err,
            crate::error_handling::LookupError::UnknownKind("dna-sample".into())
        );
    }
}
