use {derive_more::Display, std::collections::TryReserveError};

pub type Value = i32;

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("sequence is full ({capacity} values)")]
pub struct CapacityError {
    pub capacity: usize,
}

impl std::error::Error for CapacityError {}

/// A fixed-capacity buffer of integers with a separately tracked length.
///
/// The whole buffer is allocated up front; only the first `len` slots are
/// part of the sequence.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Box<[Value]>,
    len: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            values: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Like [`Sequence::with_capacity`], but reports a failed allocation
    /// instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(capacity)?;
        values.resize(capacity, 0);
        Ok(Sequence {
            values: values.into_boxed_slice(),
            len: 0,
        })
    }

    pub fn try_push(&mut self, value: Value) -> Result<(), CapacityError> {
        let Some(slot) = self.values.get_mut(self.len) else {
            return Err(CapacityError {
                capacity: self.capacity(),
            });
        };
        *slot = value;
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values[..self.len]
    }

    /// Reverses the sequence in place by swapping from both ends toward the
    /// middle.
    pub fn reverse(&mut self) {
        let values = &mut self.values[..self.len];
        let (mut start, mut end) = (0, values.len().saturating_sub(1));
        while start < end {
            values.swap(start, end);
            start += 1;
            end -= 1;
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

// Equality ignores spare capacity.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Sequence {}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn sequence_of(values: &[Value]) -> Sequence {
        let mut sequence = Sequence::with_capacity(values.len());
        for &value in values {
            sequence.try_push(value).unwrap();
        }
        sequence
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[7], &[7])]
    #[case(&[1, 2], &[2, 1])]
    #[case(&[1, 2, 3], &[3, 2, 1])]
    #[case(&[-5, 0, 5, 10], &[10, 5, 0, -5])]
    fn reverse(#[case] input: &[Value], #[case] expected: &[Value]) {
        let mut sequence = sequence_of(input);
        sequence.reverse();
        assert_eq!(sequence.as_slice(), expected);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[1])]
    #[case(&[4, 8, 15, 16, 23, 42])]
    #[case(&[i32::MIN, -1, 0, 1, i32::MAX])]
    fn reverse_twice_restores(#[case] input: &[Value]) {
        let mut sequence = sequence_of(input);
        sequence.reverse();
        sequence.reverse();
        assert_eq!(sequence.as_slice(), input);
    }

    #[test]
    fn reverse_ignores_spare_capacity() {
        let mut sequence = Sequence::new();
        sequence.try_push(1).unwrap();
        sequence.try_push(2).unwrap();
        sequence.reverse();
        assert_eq!(sequence.as_slice(), &[2, 1]);
        assert_eq!(sequence.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn push_past_capacity_fails() {
        let mut sequence = Sequence::with_capacity(2);
        sequence.try_push(1).unwrap();
        sequence.try_push(2).unwrap();
        assert!(sequence.is_full());
        assert_eq!(sequence.try_push(3), Err(CapacityError { capacity: 2 }));
        assert_eq!(sequence.as_slice(), &[1, 2]);
        assert_eq!(
            CapacityError { capacity: 2 }.to_string(),
            "sequence is full (2 values)"
        );
    }

    #[test]
    fn try_with_capacity() {
        let sequence = Sequence::try_with_capacity(3).unwrap();
        assert_eq!(sequence.capacity(), 3);
        assert!(sequence.is_empty());
        assert!(Sequence::try_with_capacity(usize::MAX).is_err());
    }

    #[test]
    fn zero_capacity() {
        let mut sequence = Sequence::with_capacity(0);
        assert!(sequence.is_empty());
        assert!(sequence.is_full());
        assert!(sequence.try_push(1).is_err());
        sequence.reverse();
        assert!(sequence.as_slice().is_empty());
    }
}
