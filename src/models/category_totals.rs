use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Per-category values in first-seen order.
///
/// Serializes as a JSON object so reports read `{"category": value}` while the
/// order stays deterministic across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals<T> {
    entries: Vec<(String, T)>
}

impl<T> CategoryTotals<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn get(&self, category: &str) -> Option<&T> {
        self.entries.iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| value)
    }

    /// Returns the slot for `category`, appending `T::default()` on first sight.
    pub fn entry(&mut self, category: &str) -> &mut T
    where
        T: Default,
    {
        let index = match self.entries.iter().position(|(name, _)| name == category) {
            Some(index) => index,
            None => {
                self.entries.push((category.to_string(), T::default()));
                self.entries.len() - 1
            }
        };

        &mut self.entries[index].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Stable sort by value; ties keep their first-seen order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.entries.sort_by(|(_, left), (_, right)| compare(left, right));
    }
}

impl<T> Default for CategoryTotals<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for CategoryTotals<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;

        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}
