use std::fmt;

use tracing::trace;

/// An apple filling of a single variety.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Apple {
    variety: String,
}

impl Apple {
    /// Prepares a filling from any variety name, including an empty one.
    pub fn new(variety: impl Into<String>) -> Self {
        let variety: String = variety.into();
        trace!(variety = %variety, "prepared filling");
        Self { variety }
    }

    /// Describes the filling, which is its variety name unchanged.
    pub fn fill(&self) -> &str {
        &self.variety
    }
}

impl From<&str> for Apple {
    fn from(variety: &str) -> Self {
        Self::new(variety)
    }
}

impl From<String> for Apple {
    fn from(variety: String) -> Self {
        Self::new(variety)
    }
}

impl fmt::Display for Apple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fill())
    }
}
