//! Furthest-failure bookkeeping for diagnostics.

use std::collections::BTreeSet;

/// Descriptions of what could have continued the parse at the furthest
/// token position reached so far.
///
/// Recording at a position beyond the current furthest discards everything
/// recorded before; recording behind it is ignored.
#[derive(Debug, Default, Clone)]
pub(crate) struct Expected {
    furthest: usize,
    items: BTreeSet<&'static str>,
}

impl Expected {
    pub(crate) const fn new() -> Self {
        Self {
            furthest: 0,
            items: BTreeSet::new(),
        }
    }

    pub(crate) fn record(&mut self, position: usize, description: &'static str) {
        match position.cmp(&self.furthest) {
            std::cmp::Ordering::Greater => {
                self.furthest = position;
                self.items.clear();
                self.items.insert(description);
            }
            std::cmp::Ordering::Equal => {
                self.items.insert(description);
            }
            std::cmp::Ordering::Less => {}
        }
    }

    /// Token index of the furthest recorded failure.
    pub(crate) const fn furthest(&self) -> usize {
        self.furthest
    }

    /// Sorted descriptions recorded at the furthest position.
    pub(crate) fn descriptions(&self) -> Vec<String> {
        self.items.iter().map(|s| (*s).to_string()).collect()
    }

    pub(crate) fn reset(&mut self, position: usize) {
        self.furthest = position;
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_further_position_replaces_items() {
        let mut expected = Expected::default();
        expected.record(1, "'('");
        expected.record(1, "AS");
        expected.record(3, "ENGINE");
        assert_eq!(expected.furthest(), 3);
        assert_eq!(expected.descriptions(), vec!["ENGINE".to_string()]);
    }

    #[test]
    fn test_earlier_position_is_ignored() {
        let mut expected = Expected::default();
        expected.record(4, "identifier");
        expected.record(2, "'('");
        assert_eq!(expected.descriptions(), vec!["identifier".to_string()]);
    }

    #[test]
    fn test_descriptions_are_sorted_and_unique() {
        let mut expected = Expected::default();
        expected.record(0, "TABLE");
        expected.record(0, "DATABASE");
        expected.record(0, "TABLE");
        assert_eq!(
            expected.descriptions(),
            vec!["DATABASE".to_string(), "TABLE".to_string()]
        );
    }

    #[test]
    fn test_reset_clears() {
        let mut expected = Expected::default();
        expected.record(5, "x");
        expected.reset(7);
        assert!(expected.descriptions().is_empty());
        assert_eq!(expected.furthest(), 7);
    }
}
