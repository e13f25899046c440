use crate::error::{Error, Result};
use crate::monoid::Monoid;

/// Recursive segment tree over positions `1..=n`.
///
/// Node `k` covers `[b, e]` and stores the fold of that range, its children
/// are `2k` and `2k + 1`. The root is node 1.
#[derive(Debug, Clone)]
pub struct SegTree<M>
where
    M: Monoid,
{
    n: usize,
    sum: Vec<M::X>,
    monoid: M,
}

impl<M> SegTree<M>
where
    M: Monoid,
    M::X: Clone,
{
    pub fn with_size(n: usize, monoid: M) -> Self {
        let values: Vec<M::X> = (0..n).map(|_| monoid.id()).collect();
        Self::from_iter(values, monoid)
    }

    pub fn from_iter<I>(iter: I, monoid: M) -> Self
    where
        I: IntoIterator<Item = M::X>,
    {
        let values: Vec<M::X> = iter.into_iter().collect();
        let n = values.len();
        let mut tree = Self {
            n,
            sum: (0..4 * n).map(|_| monoid.id()).collect(),
            monoid,
        };
        if n > 0 {
            tree.build(&values, 1, 1, n);
        }
        log::trace!("built segment tree over {n} positions");
        tree
    }

    fn build(&mut self, values: &[M::X], node: usize, b: usize, e: usize) {
        if b == e {
            self.sum[node] = values[b - 1].clone();
            return;
        }
        let mid = (b + e) / 2;
        self.build(values, node << 1, b, mid);
        self.build(values, node << 1 | 1, mid + 1, e);
        self.pull(node);
    }

    #[inline]
    fn pull(&mut self, node: usize) {
        self.sum[node] = self
            .monoid
            .op(&self.sum[node << 1], &self.sum[node << 1 | 1]);
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx == 0 || idx > self.n {
            return Err(Error::OutOfRange {
                index: idx,
                len: self.n,
            });
        }
        Ok(())
    }

    /// Fold over the closed range `[i, j]`, 1-based.
    pub fn query(&self, i: usize, j: usize) -> Result<M::X> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i > j {
            return Err(Error::InvalidRange { start: i, end: j });
        }
        Ok(self.query_clamped(i, j))
    }

    /// Like `query` without validation. Positions of `[i, j]` outside
    /// `[1, n]` contribute the identity, so an empty intersection yields it.
    pub fn query_clamped(&self, i: usize, j: usize) -> M::X {
        if self.n == 0 {
            return self.monoid.id();
        }
        self.query_rec(1, 1, self.n, i, j)
    }

    fn query_rec(&self, node: usize, b: usize, e: usize, i: usize, j: usize) -> M::X {
        if i > e || j < b {
            return self.monoid.id();
        }
        if b >= i && e <= j {
            return self.sum[node].clone();
        }
        let mid = (b + e) / 2;
        let left = self.query_rec(node << 1, b, mid, i, j);
        let right = self.query_rec(node << 1 | 1, mid + 1, e, i, j);
        self.monoid.op(&left, &right)
    }

    pub fn get(&self, idx: usize) -> Result<M::X> {
        self.query(idx, idx)
    }

    /// Combines the value at `idx` with `value` on the right, e.g. multiplies
    /// it for a product tree.
    pub fn update(&mut self, idx: usize, value: M::X) -> Result<()> {
        self.check_index(idx)?;
        self.modify(1, 1, self.n, idx, &mut |monoid: &M, old: &M::X| {
            monoid.op(old, &value)
        });
        Ok(())
    }

    pub fn set(&mut self, idx: usize, value: M::X) -> Result<()> {
        self.check_index(idx)?;
        self.modify(1, 1, self.n, idx, &mut |_: &M, _: &M::X| value.clone());
        Ok(())
    }

    fn modify<F>(&mut self, node: usize, b: usize, e: usize, idx: usize, f: &mut F)
    where
        F: FnMut(&M, &M::X) -> M::X,
    {
        if b == e {
            self.sum[node] = f(&self.monoid, &self.sum[node]);
            return;
        }
        let mid = (b + e) / 2;
        if idx <= mid {
            self.modify(node << 1, b, mid, idx, f);
        } else {
            self.modify(node << 1 | 1, mid + 1, e, idx, f);
        }
        self.pull(node);
    }

    /// Current values at positions `1..=n`, in order.
    pub fn values(&self) -> Vec<M::X> {
        let mut result = Vec::with_capacity(self.n);
        if self.n > 0 {
            self.collect_leaves(1, 1, self.n, &mut result);
        }
        result
    }

    fn collect_leaves(&self, node: usize, b: usize, e: usize, result: &mut Vec<M::X>) {
        if b == e {
            result.push(self.sum[node].clone());
            return;
        }
        let mid = (b + e) / 2;
        self.collect_leaves(node << 1, b, mid, result);
        self.collect_leaves(node << 1 | 1, mid + 1, e, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monoid::Product;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    struct Concat;

    impl Monoid for Concat {
        type X = String;
        fn id(&self) -> String {
            String::new()
        }
        fn op(&self, a: &String, b: &String) -> String {
            format!("{a}{b}")
        }
    }

    #[test]
    fn point_update_on_ones() {
        let mut tree = SegTree::with_size(5, Product::new());
        tree.update(2, 3).unwrap();
        assert_eq!(tree.get(2).unwrap(), 3);
        assert_eq!(tree.query(1, 5).unwrap(), 3);
        assert_eq!(tree.values(), [1, 3, 1, 1, 1]);
    }

    #[test]
    fn update_accumulates() {
        let mut tree = SegTree::from_iter([2, 5, 7], Product::new());
        tree.update(3, 2).unwrap();
        tree.update(3, 3).unwrap();
        assert_eq!(tree.get(3).unwrap(), 42);
        tree.set(3, 1).unwrap();
        assert_eq!(tree.query(1, 3).unwrap(), 10);
    }

    #[test]
    fn disjoint_range_is_identity() {
        let tree = SegTree::from_iter([2, 3, 4, 5, 6], Product::new());
        assert_eq!(tree.query_clamped(6, 10), 1);
        assert_eq!(tree.query_clamped(0, 0), 1);
        assert_eq!(tree.query_clamped(4, 100), 30);
        assert_eq!(tree.query_clamped(3, 2), 1);
    }

    #[test]
    fn rejects_bad_ranges() {
        let mut tree = SegTree::from_iter([2, 3, 4, 5, 6], Product::new());
        assert!(matches!(
            tree.query(6, 10),
            Err(Error::OutOfRange { index: 6, len: 5 })
        ));
        assert!(matches!(
            tree.query(0, 2),
            Err(Error::OutOfRange { index: 0, len: 5 })
        ));
        assert!(matches!(
            tree.query(4, 2),
            Err(Error::InvalidRange { start: 4, end: 2 })
        ));
        assert!(matches!(
            tree.update(9, 2),
            Err(Error::OutOfRange { index: 9, .. })
        ));
        assert_eq!(tree.values(), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_tree() {
        let tree = SegTree::from_iter(Vec::<i64>::new(), Product::new());
        assert!(tree.is_empty());
        assert_eq!(tree.query_clamped(1, 1), 1);
        assert!(matches!(tree.get(1), Err(Error::OutOfRange { len: 0, .. })));
        assert!(tree.values().is_empty());
    }

    #[test]
    fn keeps_order_for_non_commutative_op() {
        let letters = "abcdefghij".chars().map(String::from);
        let mut tree = SegTree::from_iter(letters, Concat);
        assert_eq!(tree.query(1, 10).unwrap(), "abcdefghij");
        assert_eq!(tree.query(3, 7).unwrap(), "cdefg");
        tree.update(4, "X".to_string()).unwrap();
        assert_eq!(tree.query(2, 5).unwrap(), "bcdXe");
    }

    #[test]
    fn modular_tree() {
        let p = Product::with_modulus(1_000_000_007).unwrap();
        let mut tree = SegTree::from_iter([1_000_000_006, 2, 3], p);
        assert_eq!(tree.query(1, 3).unwrap(), 1_000_000_001);
        tree.update(1, 1_000_000_006).unwrap();
        assert_eq!(tree.get(1).unwrap(), 1);
    }

    fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-20i64..20, 1..64)
    }

    proptest! {
        #[test]
        fn full_range_and_singletons(values in values_strategy()) {
            let tree = SegTree::from_iter(values.clone(), Product::new());
            let n = values.len();
            let expected = values.iter().fold(1i64, |acc, x| acc.wrapping_mul(*x));
            prop_assert_eq!(tree.query(1, n).unwrap(), expected);
            for (i, &x) in values.iter().enumerate() {
                prop_assert_eq!(tree.get(i + 1).unwrap(), x);
            }
        }

        #[test]
        fn adjacent_ranges_multiply(values in values_strategy(), cuts in any::<(usize, usize, usize)>()) {
            let tree = SegTree::from_iter(values.clone(), Product::new());
            let n = values.len();
            let mut c = [cuts.0 % n + 1, cuts.1 % n + 1, cuts.2 % n + 1];
            c.sort_unstable();
            let [a, b, c] = c;
            prop_assume!(b < c);
            let whole = tree.query(a, c).unwrap();
            let split = tree.query(a, b).unwrap().wrapping_mul(tree.query(b + 1, c).unwrap());
            prop_assert_eq!(whole, split);
        }

        #[test]
        fn update_touches_only_its_position(
            values in values_strategy(),
            pos in any::<usize>(),
            factor in -20i64..20,
        ) {
            let mut tree = SegTree::from_iter(values.clone(), Product::new());
            let n = values.len();
            let i = pos % n + 1;
            let before: Vec<Vec<i64>> = (1..=n)
                .map(|a| (a..=n).map(|b| tree.query(a, b).unwrap()).collect())
                .collect();
            tree.update(i, factor).unwrap();
            prop_assert_eq!(tree.get(i).unwrap(), values[i - 1].wrapping_mul(factor));
            for a in 1..=n {
                for b in a..=n {
                    if b < i || a > i {
                        prop_assert_eq!(tree.query(a, b).unwrap(), before[a - 1][b - a]);
                    }
                }
            }
        }
    }
}
