use crate::{
    composed::Composed,
    domain::{Codomain, Domain},
    inspect::Inspect,
    store::Pair,
};

/// The core trait for memoized bidirectional mappings.
///
/// A `Relation` maps elements of a [`Source`] type to elements of a
/// [`Target`] type, remembering every pair it resolves. The forward
/// direction computes on demand; the reverse direction only reports pairs
/// that have already been observed.
///
/// ## Implementing `Relation`
///
/// Implement the four required methods: [`forward()`] resolves an element
/// (computing and recording it if necessary), [`reverse()`] scans observed
/// pairs for a pre-image, and [`count()`]/[`at()`] expose the observed
/// pairs as an ordered sequence. The underlying function is assumed to be
/// deterministic; a relation never re-resolves an element it has already
/// recorded.
///
/// Most users never implement this trait directly and instead construct a
/// [`Surjection`](crate::Surjection) or
/// [`TrySurjection`](crate::TrySurjection).
///
/// ## Working with a `Relation`
///
/// - [`Relation::domain()`] — the total forward view.
/// - [`Relation::codomain()`] — the partial reverse view.
/// - [`Relation::then()`] — feed this relation's targets into another.
/// - [`Relation::inspect()`] — observe forward lookups without changing
///   behavior.
///
/// # Example
///
/// ```
/// use relation::{Relation, Surjection};
///
/// let squares = Surjection::new(|x: &i32| x * x);
///
/// assert_eq!(squares.domain().get(3), 9);
/// assert_eq!(squares.codomain().get(&9), Some(3));
/// assert_eq!(squares.codomain().get(&4), None);
/// ```
///
/// [`Source`]: Relation::Source
/// [`Target`]: Relation::Target
/// [`forward()`]: Relation::forward
/// [`reverse()`]: Relation::reverse
/// [`count()`]: Relation::count
/// [`at()`]: Relation::at
pub trait Relation {
    type Source;
    type Target;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves `element` to its target, recording the pair on first use.
    ///
    /// Resolving the same element again returns the recorded target without
    /// re-invoking the underlying function.
    ///
    /// # Errors
    ///
    /// Propagates the underlying function's error unchanged. A failed
    /// application records nothing. Relations over plain functions use
    /// [`Infallible`](std::convert::Infallible) here, and their domain
    /// views expose an error-free lookup instead.
    fn forward(&self, element: Self::Source) -> Result<Self::Target, Self::Error>;

    /// Returns the first-recorded pre-image of `element`, if one exists.
    ///
    /// Reverse lookup never invokes the underlying function; an element
    /// that has not appeared as a forward result has no pre-image yet.
    fn reverse(&self, element: &Self::Target) -> Option<Self::Source>;

    /// The number of pairs recorded so far.
    ///
    /// Non-decreasing for the lifetime of the relation.
    fn count(&self) -> usize;

    /// Returns the pair at `index` in insertion order, if within bounds.
    fn at(&self, index: usize) -> Option<Pair<Self::Source, Self::Target>>;

    /// The total forward view of this relation.
    fn domain(&self) -> Domain<'_, Self>
    where
        Self: Sized,
    {
        Domain::new(self)
    }

    /// The partial reverse view of this relation.
    fn codomain(&self) -> Codomain<'_, Self>
    where
        Self: Sized,
    {
        Codomain::new(self)
    }

    /// Chains this relation with another.
    ///
    /// The composed relation resolves an element by driving `self` and then
    /// `next`, and keeps its own record of the end-to-end pairs it
    /// observes. Each stage still memoizes its own pairs. Reverse lookup on
    /// the composition consults only the end-to-end record; it never walks
    /// the stages backwards.
    ///
    /// Requires `next` to accept this relation's targets and to share its
    /// error type.
    ///
    /// # Example
    ///
    /// ```
    /// use relation::{Relation, Surjection};
    ///
    /// let double = Surjection::new(|x: &i32| x * 2);
    /// let shifted = Surjection::new(|x: &i32| x + 1);
    ///
    /// let chain = double.then(shifted);
    /// assert_eq!(chain.domain().get(3), 7);
    /// assert_eq!(chain.codomain().get(&7), Some(3));
    /// ```
    fn then<Next>(
        self,
        next: Next,
    ) -> impl Relation<Source = Self::Source, Target = Next::Target, Error = Self::Error>
    where
        Self: Sized,
        Self::Source: Clone + PartialEq,
        Next: Relation<Source = Self::Target, Error = Self::Error>,
        Next::Target: Clone + PartialEq,
    {
        Composed::new(self, next)
    }

    /// Observes forward lookups without modifying behavior.
    ///
    /// `on_source` runs before each forward lookup and `on_target` after
    /// it succeeds, for cache hits and misses alike. Reverse lookup and
    /// enumeration pass through untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use relation::{Relation, Surjection};
    ///
    /// let watched = Surjection::new(|x: &i32| x * x).inspect(
    ///     |input| println!("resolving {input}"),
    ///     |output| println!("resolved to {output}"),
    /// );
    ///
    /// assert_eq!(watched.domain().get(5), 25);
    /// ```
    fn inspect<OnSource, OnTarget>(
        self,
        on_source: OnSource,
        on_target: OnTarget,
    ) -> impl Relation<Source = Self::Source, Target = Self::Target, Error = Self::Error>
    where
        Self: Sized,
        OnSource: Fn(&Self::Source),
        OnTarget: Fn(&Self::Target),
    {
        Inspect::new(self, on_source, on_target)
    }
}
