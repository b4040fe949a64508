// SPDX-License-Identifier: MPL-2.0
//! Stop list: the ordered values of the slider and their display labels.

/// Ordered stop identifiers with an optional parallel list of labels.
///
/// Labels are matched to values by position. A value without a label reads
/// as an empty string and labels past the last value are never shown.
#[derive(Debug, Clone, PartialEq)]
pub struct StopList<V> {
    values: Vec<V>,
    labels: Vec<String>,
}

impl<V> Default for StopList<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl<V: Clone + PartialEq> StopList<V> {
    /// Creates a stop list from values with no labels.
    #[must_use]
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values,
            labels: Vec::new(),
        }
    }

    /// Returns the stop values in order.
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Returns the labels exactly as they were given.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replaces the values, keeping the current labels.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.values = values;
        if self.labels.len() > self.values.len() {
            tracing::debug!(
                labels = self.labels.len(),
                values = self.values.len(),
                "more labels than values, extra labels are hidden"
            );
        }
    }

    /// Replaces the labels.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        if labels.len() != self.values.len() {
            tracing::debug!(
                labels = labels.len(),
                values = self.values.len(),
                "label count does not match value count"
            );
        }
        self.labels = labels;
    }

    /// Number of stop points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, if the index names a stop.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Label drawn for the stop at `index`.
    ///
    /// Returns `None` past the last stop and `""` for stops without a label.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        if index >= self.values.len() {
            return None;
        }
        Some(self.labels.get(index).map_or("", String::as_str))
    }

    /// Index of the first stop equal to `value`.
    #[must_use]
    pub fn position_of(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|candidate| candidate == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(values: Vec<i32>, labels: &[&str]) -> StopList<i32> {
        let mut stops = StopList::new(values);
        stops.set_labels(labels.iter().map(|s| (*s).to_string()).collect());
        stops
    }

    #[test]
    fn default_is_empty() {
        let stops: StopList<i32> = StopList::default();
        assert!(stops.is_empty());
        assert_eq!(stops.len(), 0);
        assert!(stops.label_at(0).is_none());
    }

    #[test]
    fn labels_match_values_by_position() {
        let stops = labeled(vec![10, 20, 30], &["Low", "Mid", "High"]);
        assert_eq!(stops.label_at(1), Some("Mid"));
        assert_eq!(stops.value_at(2), Some(&30));
    }

    #[test]
    fn missing_labels_read_as_empty() {
        let stops = labeled(vec![1, 2, 3], &["one"]);
        assert_eq!(stops.label_at(0), Some("one"));
        assert_eq!(stops.label_at(1), Some(""));
        assert_eq!(stops.label_at(2), Some(""));
    }

    #[test]
    fn extra_labels_are_not_shown() {
        let stops = labeled(vec![1], &["one", "two", "three"]);
        assert_eq!(stops.label_at(1), None);
        assert_eq!(stops.labels().len(), 3);
    }

    #[test]
    fn replacing_values_keeps_labels() {
        let mut stops = labeled(vec![1, 2], &["a", "b"]);
        stops.set_values(vec![5, 6, 7]);
        assert_eq!(stops.label_at(1), Some("b"));
        assert_eq!(stops.label_at(2), Some(""));
    }

    #[test]
    fn position_of_finds_first_match() {
        let stops = StopList::new(vec!["a", "b", "a"]);
        assert_eq!(stops.position_of(&"a"), Some(0));
        assert_eq!(stops.position_of(&"b"), Some(1));
        assert_eq!(stops.position_of(&"z"), None);
    }
}
