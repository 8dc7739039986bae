/// Ordered set of location names chosen for a comparison graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSet {
    locations: Vec<String>,
}

impl LocationSet {
    /// Add a location; blank input and duplicates are ignored
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, location: &str) -> bool {
        let location = location.trim();
        if location.is_empty() || self.contains(location) {
            return false;
        }
        self.locations.push(location.to_string());
        true
    }

    /// Remove a location by value; returns true if it was present
    pub fn remove(&mut self, location: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l != location);
        self.locations.len() != before
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.locations.clone()
    }
}
