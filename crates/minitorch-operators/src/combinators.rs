//! Higher-order combinators: map, zip-with, reduce.
//!
//! The plain forms take the function and the sequence together. The curried
//! forms (`mapper`, `zipper`, `reducer`) return a reusable closure over `&[f64]`.

/// Apply `f` to every element, preserving order and length.
pub fn map<T, U, I, F>(f: F, ls: I) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    ls.into_iter().map(f).collect()
}

/// Lazy form of [`map`].
pub fn map_iter<T, U, I, F>(f: F, ls: I) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    ls.into_iter().map(f)
}

/// [`map`] with a fallible function. Stops at the first error and returns it.
pub fn try_map<T, U, E, I, F>(f: F, ls: I) -> Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<U, E>,
{
    ls.into_iter().map(f).collect()
}

/// Apply `f` to corresponding pairs. Extra elements of the longer input are dropped.
pub fn zip_with<A, B, U, I, J, F>(mut f: F, ls1: I, ls2: J) -> Vec<U>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    F: FnMut(A, B) -> U,
{
    ls1.into_iter().zip(ls2).map(|(x, y)| f(x, y)).collect()
}

/// Left fold starting from `start`: `f(f(f(start, s0), s1), s2)...`
///
/// An empty sequence returns `start` unchanged.
pub fn reduce<T, A, I, F>(f: F, start: A, ls: I) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    ls.into_iter().fold(start, f)
}

pub fn mapper<F>(f: F) -> impl Fn(&[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    move |ls: &[f64]| map(&f, ls.iter().copied())
}

pub fn zipper<F>(f: F) -> impl Fn(&[f64], &[f64]) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    move |ls1: &[f64], ls2: &[f64]| zip_with(&f, ls1.iter().copied(), ls2.iter().copied())
}

pub fn reducer<F>(f: F, start: f64) -> impl Fn(&[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    move |ls: &[f64]| reduce(&f, start, ls.iter().copied())
}
