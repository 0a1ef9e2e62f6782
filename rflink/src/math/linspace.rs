use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
///
/// `n == 1` yields just `start`, `n == 0` yields nothing.
pub fn linspace<T>(start: T, end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let step = match n {
        0 | 1 => T::zero(),
        _ => T::from_usize(n - 1).map_or(T::zero(), |segments| (end - start) / segments),
    };
    (0..n).map(move |i| T::from_usize(i).map_or(start, |i| start + i * step))
}
