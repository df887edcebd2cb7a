//! Parks supported by the recommendation engine.
//!
//! The enum replaces free-form park names so typos are rejected at the
//! boundary instead of silently producing empty topology lookups.
//!
//! # Examples
//! ```
//! use std::str::FromStr;
//! use parkpicks_core::Park;
//!
//! let park = Park::from_str("Disneyland")?;
//! assert_eq!(park.feed_id(), 16);
//! assert_eq!(Park::from_str("epcot")?, Park::Epcot);
//! # Ok::<(), parkpicks_core::UnknownParkError>(())
//! ```

use thiserror::Error;

/// A theme park with a live wait-time feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Park {
    /// Disneyland Park, Anaheim.
    Disneyland,
    /// Disney California Adventure.
    DisneyCaliforniaAdventure,
    /// Disney's Animal Kingdom.
    AnimalKingdom,
    /// Magic Kingdom, Walt Disney World.
    MagicKingdom,
    /// EPCOT.
    Epcot,
    /// Disney's Hollywood Studios.
    HollywoodStudios,
}

/// Errors returned when a park name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown park '{name}'")]
pub struct UnknownParkError {
    /// The rejected input.
    pub name: String,
}

impl Park {
    /// Every supported park, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Disneyland,
        Self::DisneyCaliforniaAdventure,
        Self::AnimalKingdom,
        Self::MagicKingdom,
        Self::Epcot,
        Self::HollywoodStudios,
    ];

    /// Identifier used by the live wait-time provider.
    #[must_use]
    pub const fn feed_id(self) -> u32 {
        match self {
            Self::Disneyland => 16,
            Self::DisneyCaliforniaAdventure => 17,
            Self::AnimalKingdom => 8,
            Self::MagicKingdom => 6,
            Self::Epcot => 5,
            Self::HollywoodStudios => 7,
        }
    }

    /// Human-facing park name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Disneyland => "Disneyland",
            Self::DisneyCaliforniaAdventure => "Disney California Adventure",
            Self::AnimalKingdom => "Animal Kingdom",
            Self::MagicKingdom => "Disney Magic Kingdom",
            Self::Epcot => "Epcot",
            Self::HollywoodStudios => "Disney Hollywood Studios",
        }
    }

    /// Short kebab-case identifier for command lines and file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Disneyland => "disneyland",
            Self::DisneyCaliforniaAdventure => "california-adventure",
            Self::AnimalKingdom => "animal-kingdom",
            Self::MagicKingdom => "magic-kingdom",
            Self::Epcot => "epcot",
            Self::HollywoodStudios => "hollywood-studios",
        }
    }

    /// Resolve a park from its feed identifier.
    #[must_use]
    pub fn from_feed_id(feed_id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|park| park.feed_id() == feed_id)
    }
}

impl std::fmt::Display for Park {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Park {
    type Err = UnknownParkError;

    /// Accepts display names and slugs, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|park| {
                park.display_name().eq_ignore_ascii_case(trimmed)
                    || park.slug().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownParkError {
                name: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Park {
    type Error = UnknownParkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Park> for String {
    fn from(park: Park) -> Self {
        park.display_name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Disneyland", Park::Disneyland)]
    #[case("Disney California Adventure", Park::DisneyCaliforniaAdventure)]
    #[case("disney magic kingdom", Park::MagicKingdom)]
    #[case("hollywood-studios", Park::HollywoodStudios)]
    #[case("  Animal Kingdom ", Park::AnimalKingdom)]
    fn parses_names_and_slugs(#[case] input: &str, #[case] expected: Park) {
        assert_eq!(Park::from_str(input), Ok(expected));
    }

    #[rstest]
    fn rejects_typos() {
        let err = Park::from_str("Disneyworld").unwrap_err();
        assert_eq!(err.name, "Disneyworld");
        assert!(err.to_string().contains("unknown park"));
    }

    #[rstest]
    fn feed_ids_round_trip() {
        for park in Park::ALL {
            assert_eq!(Park::from_feed_id(park.feed_id()), Some(park));
        }
        assert_eq!(Park::from_feed_id(999), None);
    }

    #[rstest]
    fn display_matches_display_name() {
        assert_eq!(Park::Epcot.to_string(), "Epcot");
    }
}
