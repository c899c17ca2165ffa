//! Small function combinators that pair with the operators.

/// Returns its argument.
pub fn identity<T>(x: T) -> T {
    x
}

/// A function that ignores its argument and always returns `x`.
pub fn constantly<T, A>(x: T) -> impl Fn(A) -> T
where
    T: Clone,
{
    move |_| x.clone()
}

/// The predicate that holds exactly when `f` does not.
pub fn complement<T, F>(mut f: F) -> impl FnMut(&T) -> bool
where
    F: FnMut(&T) -> bool,
{
    move |x: &T| !f(x)
}

/// `f` after `g`: the result of `g` is passed to `f`.
pub fn comp<A, B, C, F, G>(mut f: F, mut g: G) -> impl FnMut(A) -> C
where
    F: FnMut(B) -> C,
    G: FnMut(A) -> B,
{
    move |x| f(g(x))
}
