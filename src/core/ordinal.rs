/// Convert a place into its English ordinal.
///
/// Places are 1-based, though `0` is accepted and yields `"0th"`.
///
/// # Examples
///
/// ```
/// use rs_payouts::core::ordinal;
///
/// assert_eq!("1st", ordinal(1));
/// assert_eq!("12th", ordinal(12));
/// assert_eq!("23rd", ordinal(23));
/// assert_eq!("101st", ordinal(101));
/// ```
pub fn ordinal(place: usize) -> String {
    // 11, 12 and 13 are the exceptions to the last digit rule.
    let suffix = match (place % 100, place % 10) {
        (11..=19, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{place}{suffix}")
}

/// Label for the places `start` through `end` (both 1-based and inclusive).
///
/// A single place gets its plain ordinal, tied places get both ends joined
/// with a slash.
///
/// ```
/// use rs_payouts::core::place_label;
///
/// assert_eq!("3rd", place_label(3, 3));
/// assert_eq!("5th/6th", place_label(5, 6));
/// ```
pub fn place_label(start: usize, end: usize) -> String {
    if start == end {
        ordinal(start)
    } else {
        format!("{}/{}", ordinal(start), ordinal(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_twenty_five() {
        let expected = [
            "0th", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th",
            "12th", "13th", "14th", "15th", "16th", "17th", "18th", "19th", "20th", "21st",
            "22nd", "23rd", "24th", "25th",
        ];
        for (place, want) in expected.iter().enumerate() {
            assert_eq!(*want, ordinal(place), "Wrong ordinal for {place}");
        }
    }

    #[test]
    fn test_hundreds() {
        assert_eq!("100th", ordinal(100));
        assert_eq!("101st", ordinal(101));
        assert_eq!("102nd", ordinal(102));
        assert_eq!("103rd", ordinal(103));
        assert_eq!("111th", ordinal(111));
        assert_eq!("112th", ordinal(112));
        assert_eq!("113th", ordinal(113));
        assert_eq!("121st", ordinal(121));
        assert_eq!("1011th", ordinal(1011));
        assert_eq!("1021st", ordinal(1021));
    }

    #[test]
    fn test_place_label() {
        assert_eq!("1st", place_label(1, 1));
        assert_eq!("5th/6th", place_label(5, 6));
        assert_eq!("9th/12th", place_label(9, 12));
    }
}
