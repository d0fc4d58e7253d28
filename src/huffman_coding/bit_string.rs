use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::HuffmanError;

/// A sequence of left/right steps. Used both for a single code and for a whole encoded text.
///
/// `false` is a left descent ("0"), `true` a right descent ("1").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString(Vec<bool>);

impl BitString {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, step: bool) {
        self.0.push(step)
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.0.pop()
    }

    /// Append every step of another string.
    pub fn extend_from(&mut self, other: &BitString) {
        self.0.extend_from_slice(&other.0)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// True if every step of self matches the start of other.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .try_for_each(|&b| f.write_str(if b { "1" } else { "0" }))
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    /// Parse a string of '0' and '1'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, step)| match step {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HuffmanError::InvalidStep { step, position }),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::BitString;
    use crate::errors::HuffmanError;

    #[test]
    fn display_test() {
        let bits = [false, true, true, false].into_iter().collect::<BitString>();
        assert_eq!(bits.to_string(), "0110");
        assert_eq!(BitString::new().to_string(), "");
    }

    #[test]
    fn parse_test() {
        let bits: BitString = "1001".parse().unwrap();
        assert_eq!(bits.as_slice(), &[true, false, false, true]);
        assert_eq!(bits.to_string(), "1001");
    }

    #[test]
    fn parse_rejects_other_chars_test() {
        let err = "10x1".parse::<BitString>().unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::InvalidStep {
                step: 'x',
                position: 2
            }
        ));
    }

    #[test]
    fn prefix_test() {
        let a: BitString = "10".parse().unwrap();
        let b: BitString = "101".parse().unwrap();
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(a.is_prefix_of(&a));
    }

    #[test]
    fn push_pop_extend_test() {
        let mut bits = BitString::new();
        bits.push(true);
        bits.push(false);
        assert_eq!(bits.pop(), Some(false));
        let tail: BitString = "011".parse().unwrap();
        bits.extend_from(&tail);
        assert_eq!(bits.to_string(), "1011");
        bits.clear();
        assert!(bits.is_empty());
    }
}
