use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

mod error;

pub use error::{Error, Result};

/// Numeric identifier of an active container, as printed by the listing tool.
///
/// Only meaningful within the scrape cycle that produced it.
///
/// # Examples
///
/// ```
/// # use lxc_exporter::container::ContainerID;
/// let id: ContainerID = " 101 ".parse().unwrap();
/// assert_eq!(id.as_raw(), 101);
/// assert_eq!(id.to_string(), "101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerID(u32);

impl ContainerID {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ContainerID {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for ContainerID {
    type Err = Error;

    /// Parses a container id from a single line of listing output.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a decimal
    /// integer is rejected with [`Error::InvalidContainerID`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|source: ParseIntError| Error::InvalidContainerID {
                raw: trimmed.to_owned(),
                source,
            })
    }
}

impl fmt::Display for ContainerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
