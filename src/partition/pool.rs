use rand::{Rng, seq::IndexedRandom};

/// The set of unassigned tracts, with O(1) take/contains and uniform sampling.
#[derive(Debug, Clone)]
pub(crate) struct TractPool {
    members: Vec<usize>,          // members[i] = tract currently in the pool
    position: Vec<Option<usize>>, // position[t] = Some(i) when members[i] is t
}

impl TractPool {
    /// Create a pool holding every tract in `0..num_tracts`.
    pub(crate) fn new(num_tracts: usize) -> Self {
        Self {
            members: (0..num_tracts).collect(),
            position: (0..num_tracts).map(Some).collect(),
        }
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.members.len() }

    #[inline] pub(crate) fn is_empty(&self) -> bool { self.members.is_empty() }

    #[inline]
    pub(crate) fn contains(&self, tract: usize) -> bool {
        debug_assert!(tract < self.position.len(), "tract out of range");
        self.position[tract].is_some()
    }

    /// Tracts currently in the pool, in no particular order.
    #[inline] pub(crate) fn members(&self) -> &[usize] { &self.members }

    /// Remove `tract` from the pool. Returns whether it was present.
    pub(crate) fn try_take(&mut self, tract: usize) -> bool {
        debug_assert!(tract < self.position.len(), "tract out of range");
        let Some(pos) = self.position[tract].take() else { return false };

        // Remove by swapping with last element.
        let last = self.members.swap_remove(pos);
        debug_assert_eq!(last, tract);
        if pos < self.members.len() {
            self.position[self.members[pos]] = Some(pos);
        }
        true
    }

    /// Choose a tract uniformly at random without removing it.
    pub(crate) fn sample(&self, rng: &mut impl Rng) -> Option<usize> {
        self.members.choose(rng).copied()
    }

    /// Put every tract back in the pool.
    pub(crate) fn reset(&mut self) {
        let num_tracts = self.position.len();
        self.members = (0..num_tracts).collect();
        self.position = (0..num_tracts).map(Some).collect();
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn new_holds_everything() {
        let pool = TractPool::new(4);
        assert_eq!(pool.len(), 4);
        assert!((0..4).all(|t| pool.contains(t)));
    }

    #[test]
    fn take_succeeds_exactly_once() {
        let mut pool = TractPool::new(3);
        assert!(pool.try_take(1));
        assert!(!pool.try_take(1));
        assert!(!pool.contains(1));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_updates_swapped_position() {
        let mut pool = TractPool::new(5);
        assert!(pool.try_take(0)); // 4 moves into slot 0
        assert!(pool.try_take(4));
        assert!(pool.try_take(2));

        let mut rest = pool.members().to_vec();
        rest.sort_unstable();
        assert_eq!(rest, vec![1, 3]);
        assert!(pool.contains(1) && pool.contains(3));
    }

    #[test]
    fn take_last_element() {
        let mut pool = TractPool::new(2);
        assert!(pool.try_take(1));
        assert!(pool.try_take(0));
        assert!(pool.is_empty());
    }

    #[test]
    fn sample_only_returns_members() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = TractPool::new(6);
        for t in [0, 2, 4] { pool.try_take(t); }
        for _ in 0..50 {
            let t = pool.sample(&mut rng).unwrap();
            assert!(t % 2 == 1);
        }
    }

    #[test]
    fn sample_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = TractPool::new(1);
        pool.try_take(0);
        assert_eq!(pool.sample(&mut rng), None);
    }

    #[test]
    fn reset_restores_all() {
        let mut pool = TractPool::new(3);
        pool.try_take(0);
        pool.try_take(2);
        pool.reset();
        assert_eq!(pool.len(), 3);
        assert!((0..3).all(|t| pool.contains(t)));
    }
}
