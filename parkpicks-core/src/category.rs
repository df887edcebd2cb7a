//! Ride categories used by the classification tables.
//!
//! # Examples
//! ```
//! use parkpicks_core::Category;
//!
//! assert_eq!(Category::RopeDrop.as_str(), "rope-drop");
//! assert_eq!("kid-friendly".parse::<Category>(), Ok(Category::KidFriendly));
//! ```

/// A tag attached to rides by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Coasters and other high-intensity rides.
    Thrill,
    /// Slow, relaxed rides.
    Chill,
    /// Rides that are fully under cover.
    Indoor,
    /// Rides suited to small children.
    KidFriendly,
    /// Rides that are best after dark.
    NightAmbiance,
    /// Rides worth doing at park opening.
    RopeDrop,
    /// Single-rider queue entries.
    SingleRider,
    /// Attractions most visitors pass over.
    CommonlySkipped,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 8] = [
        Self::Thrill,
        Self::Chill,
        Self::Indoor,
        Self::KidFriendly,
        Self::NightAmbiance,
        Self::RopeDrop,
        Self::SingleRider,
        Self::CommonlySkipped,
    ];

    /// Return the category as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thrill => "thrill",
            Self::Chill => "chill",
            Self::Indoor => "indoor",
            Self::KidFriendly => "kid-friendly",
            Self::NightAmbiance => "night-ambiance",
            Self::RopeDrop => "rope-drop",
            Self::SingleRider => "single-rider",
            Self::CommonlySkipped => "commonly-skipped",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
