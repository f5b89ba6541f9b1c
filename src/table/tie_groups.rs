use std::ops::Range;

/// The tie structure of a payout table.
///
/// Adjacent places paid the same fraction form a tie group. For every place
/// this stores the size of the group that place is in, so the fractions
/// `[.4, .25, .15, .10, .05, .05]` have sizes `[1, 1, 1, 1, 2, 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TieGroups {
    sizes: Vec<usize>,
}

impl TieGroups {
    /// Compute the tie groups of a list of fractions.
    ///
    /// Only the values matter, so identical fractions always give identical
    /// groups.
    ///
    /// ```
    /// use rs_payouts::table::TieGroups;
    ///
    /// let ties = TieGroups::from_fractions(&[0.4, 0.25, 0.15, 0.10, 0.05, 0.05]);
    /// assert_eq!(&[1, 1, 1, 1, 2, 2], ties.as_slice());
    /// ```
    pub fn from_fractions(fractions: &[f64]) -> Self {
        let mut sizes = vec![0; fractions.len()];
        let mut start = 0;
        while start < fractions.len() {
            let value = fractions[start];
            // NaN never equals itself, still make progress.
            let len = fractions[start..]
                .iter()
                .take_while(|&&f| f == value)
                .count()
                .max(1);
            sizes[start..start + len].fill(len);
            start += len;
        }
        Self { sizes }
    }

    /// The number of places tied with `place` (0-based), including itself.
    ///
    /// # Panics
    ///
    /// If `place` isn't a place in the table.
    pub fn group_size(&self, place: usize) -> usize {
        self.sizes[place]
    }

    /// Number of places covered.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Is any place tied with another.
    pub fn has_ties(&self) -> bool {
        self.sizes.iter().any(|&size| size > 1)
    }

    /// Iterate over the 0-based index range of every tie group in place order.
    pub fn groups(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let mut start = 0;
        std::iter::from_fn(move || {
            let size = *self.sizes.get(start)?;
            let group = start..start + size;
            start += size;
            Some(group)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ties() {
        let ties = TieGroups::from_fractions(&[0.5, 0.3, 0.2]);
        assert_eq!(&[1, 1, 1], ties.as_slice());
        assert!(!ties.has_ties());
        assert_eq!(vec![0..1, 1..2, 2..3], ties.groups().collect::<Vec<_>>());
    }

    #[test]
    fn test_tail_tie() {
        let ties = TieGroups::from_fractions(&[0.4, 0.25, 0.15, 0.10, 0.05, 0.05]);
        assert_eq!(&[1, 1, 1, 1, 2, 2], ties.as_slice());
        assert!(ties.has_ties());
        assert_eq!(2, ties.group_size(5));
        assert_eq!(
            vec![0..1, 1..2, 2..3, 3..4, 4..6],
            ties.groups().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_multiple_ties() {
        let ties = TieGroups::from_fractions(&[0.3, 0.3, 0.2, 0.05, 0.05, 0.05, 0.05]);
        assert_eq!(&[2, 2, 1, 4, 4, 4, 4], ties.as_slice());
        assert_eq!(vec![0..2, 2..3, 3..7], ties.groups().collect::<Vec<_>>());
    }

    #[test]
    fn test_deterministic() {
        let fractions = [0.4, 0.2, 0.2, 0.1, 0.1];
        assert_eq!(
            TieGroups::from_fractions(&fractions),
            TieGroups::from_fractions(&fractions.to_vec())
        );
    }

    #[test]
    fn test_empty() {
        let ties = TieGroups::from_fractions(&[]);
        assert!(ties.is_empty());
        assert_eq!(0, ties.groups().count());
    }

    #[test]
    #[should_panic]
    fn test_group_size_out_of_range() {
        let ties = TieGroups::from_fractions(&[0.7, 0.3]);
        ties.group_size(2);
    }
}
