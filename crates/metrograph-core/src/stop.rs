//! Stop records loaded from the repository.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A stop in the transit network.
///
/// Identity is the numeric id alone; the display name takes no part in
/// equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub id: i64,
    pub name: String,
}

impl Stop {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Stop {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_is_id_only() {
        let a = Stop::new(4, "Gare du Nord");
        let b = Stop::new(4, "Gare du Nord (renamed)");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn display_includes_id() {
        assert_eq!(Stop::new(7, "Châtelet").to_string(), "Châtelet (7)");
    }
}
