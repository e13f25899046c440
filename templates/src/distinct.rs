use std::collections::HashSet;
use std::hash::Hash;

pub fn count_distinct<T, I>(values: I) -> usize
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<HashSet<T>>().len()
}
