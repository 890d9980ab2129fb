//! Step functions over positions, stored as breakpoints.

/// An ordered list of `(position, value)` breakpoints.
///
/// The value at a position is the value of the last breakpoint at or before it, or `T::default()`
/// before the first breakpoint. Consecutive breakpoints never hold equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseState<T> {
    position_first: usize,
    states: Vec<(usize, T)>,
}

impl<T: Clone + PartialEq + Default> Default for SparseState<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Clone + PartialEq + Default> SparseState<T> {
    /// Create an empty state whose contents are meaningful from `position_first` onwards.
    ///
    /// [`SparseState::merge`] replaces the receiver's breakpoints from `position_first` of the
    /// other state.
    pub fn new(position_first: usize) -> Self {
        Self {
            position_first,
            states: Vec::new(),
        }
    }

    fn find(&self, position: usize) -> usize {
        self.states.partition_point(|(p, _)| *p < position)
    }

    /// Drop breakpoints at or after `position`, then add `(position, value)` unless it repeats the
    /// value now in effect.
    pub fn set(&mut self, position: usize, value: T) {
        self.delete(position);
        if self.states.last().is_none_or(|(_, last)| *last != value) {
            self.states.push((position, value));
        }
    }

    /// Value in effect at `position`.
    pub fn value_at(&self, position: usize) -> T {
        let index = self.states.partition_point(|(p, _)| *p <= position);
        match index {
            0 => T::default(),
            i => self.states[i - 1].1.clone(),
        }
    }

    /// Remove breakpoints at or after `position`, returning whether any were removed.
    pub fn delete(&mut self, position: usize) -> bool {
        let low = self.find(position);
        if low < self.states.len() {
            self.states.truncate(low);
            true
        } else {
            false
        }
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Breakpoints in position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.states.iter().map(|(p, v)| (*p, v))
    }

    /// Replace everything from `other`'s first position onwards with `other`'s breakpoints.
    ///
    /// Breakpoints after `ignore_after` are dropped first since they are about to be recomputed.
    /// Returns whether the step function changed up to the merged region.
    pub fn merge(&mut self, other: &SparseState<T>, ignore_after: usize) -> bool {
        self.delete(ignore_after + 1);
        let low = self.find(other.position_first);
        let different = self.states[low..] != other.states[..];
        if !different {
            return false;
        }
        let mut changed = false;
        if low < self.states.len() {
            self.states.truncate(low);
            changed = true;
        }
        let mut start_other = 0;
        if let (Some((_, last)), Some((_, first))) = (self.states.last(), other.states.first())
            && last == first
        {
            start_other = 1;
        }
        if start_other < other.states.len() {
            self.states.extend_from_slice(&other.states[start_other..]);
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_steps() {
        let mut ss: SparseState<i32> = SparseState::default();
        assert_eq!(ss.value_at(5), 0);
        ss.set(0, 30);
        ss.set(2, 32);
        assert_eq!(ss.value_at(1), 30);
        assert_eq!(ss.value_at(2), 32);
        assert_eq!(ss.value_at(100), 32);
        assert_eq!(ss.len(), 2);
    }

    #[test]
    fn test_value_before_first_is_default() {
        let mut ss = SparseState::new(0);
        ss.set(3, String::from("x"));
        assert_eq!(ss.value_at(2), "");
        assert_eq!(ss.value_at(3), "x");
    }

    #[test]
    fn test_set_skips_repeats_and_truncates() {
        let mut ss = SparseState::new(0);
        ss.set(0, 1);
        ss.set(2, 1);
        assert_eq!(ss.len(), 1);
        ss.set(4, 2);
        ss.set(6, 3);
        ss.set(5, 7);
        assert_eq!(ss.iter().collect::<Vec<_>>(), vec![(0, &1), (4, &2), (5, &7)]);
        assert!(ss.delete(4));
        assert!(!ss.delete(4));
        assert_eq!(ss.value_at(9), 1);
    }

    #[test]
    fn test_merge_reports_changes() {
        let mut base = SparseState::new(0);
        base.set(0, 30);
        base.set(2, 32);
        base.set(5, 35);

        let mut same = SparseState::new(2);
        same.set(2, 32);
        same.set(5, 35);
        assert!(!base.merge(&same, 10));

        let mut other = SparseState::new(2);
        other.set(3, 33);
        assert!(base.merge(&other, 10));
        assert_eq!(base.value_at(2), 30);
        assert_eq!(base.value_at(3), 33);
        assert_eq!(base.value_at(6), 33);
    }

    #[test]
    fn test_merge_joins_equal_values() {
        let mut base = SparseState::new(0);
        base.set(0, 1);
        let mut other = SparseState::new(4);
        other.set(4, 1);
        other.set(6, 2);
        assert!(base.merge(&other, 10));
        assert_eq!(base.len(), 2);
        assert_eq!(base.value_at(5), 1);
        assert_eq!(base.value_at(6), 2);
    }
}
