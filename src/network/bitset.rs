//! Neuron sets are bitboards stretched to an arbitrary number of neurons, and
//! are used both for activations and for adjacency masks.

use std::iter::FusedIterator;

use super::neuron::NeuronId;

/// A set of neuron ids, stored as packed bits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NeuronSet {
    words: Vec<u64>,
    len: usize,
}
impl std::fmt::Debug for NeuronSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for id in 0..self.len {
            if id % 64 == 0 && id != 0 {
                writeln!(f)?
            }
            write!(f, "{}", if self.contains(id) { 'x' } else { '.' })?
        }
        Ok(())
    }
}
impl NeuronSet {
    /// Returns an empty set able to hold `len` neurons.
    pub fn empty(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Returns a set from a sequence of booleans, one per neuron.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut set = Self::default();
        for (id, bit) in bits.into_iter().enumerate() {
            if id % 64 == 0 {
                set.words.push(0)
            }
            set.len += 1;
            set.set(id, bit)
        }
        set
    }

    /// Number of neurons the set can hold.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the set cannot hold any neuron.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks if no neuron is in the set.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Checks if a given neuron is in the set.
    #[inline(always)]
    pub fn contains(&self, id: NeuronId) -> bool {
        id < self.len && self.words[id / 64] & (1 << (id % 64)) != 0
    }

    /// Adds a neuron to the set.
    ///
    /// # Panics
    /// If the id is out of bounds.
    #[inline(always)]
    pub fn insert(&mut self, id: NeuronId) {
        assert!(id < self.len, "neuron {id} out of bounds");
        self.words[id / 64] |= 1 << (id % 64)
    }

    /// Removes a neuron from the set.
    #[inline(always)]
    pub fn remove(&mut self, id: NeuronId) {
        if id < self.len {
            self.words[id / 64] &= !(1 << (id % 64))
        }
    }

    /// Adds or removes a neuron.
    #[inline(always)]
    pub fn set(&mut self, id: NeuronId, value: bool) {
        if value {
            self.insert(id)
        } else {
            self.remove(id)
        }
    }

    /// Returns the cardinality of the set (i.e. how many neurons are set).
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the number of neurons set in both sets.
    #[inline]
    pub fn intersection_cardinality(&self, other: &Self) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Iterates over the ids in the set, in increasing order.
    pub fn iter(&self) -> NeuronSetIter<'_> {
        NeuronSetIter {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}
impl<'a> IntoIterator for &'a NeuronSet {
    type Item = NeuronId;
    type IntoIter = NeuronSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the ids of a [`NeuronSet`], popping the LS1B of each word.
pub struct NeuronSetIter<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}
impl Iterator for NeuronSetIter<'_> {
    type Item = NeuronId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current.wrapping_sub(1);
        Some(self.index * 64 + bit)
    }
}
impl FusedIterator for NeuronSetIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove() {
        let mut set = NeuronSet::empty(130);
        assert!(set.is_clear());
        set.insert(0);
        set.insert(64);
        set.insert(129);
        assert!(set.contains(64));
        assert!(!set.contains(65));
        assert_eq!(set.cardinality(), 3);
        set.remove(64);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 129]);
    }

    #[test]
    fn out_of_bounds_is_never_contained() {
        let set = NeuronSet::from_bits([true; 3]);
        assert!(!set.contains(3));
        assert!(!set.contains(1000));
    }

    #[test]
    fn intersection() {
        let a = NeuronSet::from_bits([true, true, false, true]);
        let b = NeuronSet::from_bits([false, true, true, true]);
        assert_eq!(a.intersection_cardinality(&b), 2);
    }

    #[test]
    fn empty_iter() {
        assert_eq!(NeuronSet::empty(0).iter().next(), None);
        assert_eq!(NeuronSet::empty(200).iter().next(), None);
    }
}
