use std::convert::Infallible;

use crate::{store::Pair, Relation};

/// The total forward view of a relation.
///
/// Obtained from [`Relation::domain()`]. The view borrows the relation, so
/// it cannot outlive it, and it is live: pairs recorded by later forward
/// lookups are visible through the same view.
///
/// # Example
///
/// ```
/// use relation::{Relation, Surjection};
///
/// let doubled = Surjection::new(|x: &i32| x * 2);
/// let domain = doubled.domain();
///
/// assert_eq!(domain.get(2), 4);
/// assert_eq!(domain.get(5), 10);
///
/// let pairs: Vec<(i32, i32)> = domain.iter().map(Into::into).collect();
/// assert_eq!(pairs, vec![(2, 4), (5, 10)]);
/// ```
pub struct Domain<'a, R> {
    relation: &'a R,
}

impl<'a, R: Relation> Domain<'a, R> {
    pub(crate) const fn new(relation: &'a R) -> Self {
        Self { relation }
    }

    /// Resolves `element`, invoking the underlying function on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the relation's error unchanged; a failed application
    /// records nothing.
    pub fn try_get(&self, element: R::Source) -> Result<R::Target, R::Error> {
        self.relation.forward(element)
    }

    /// The number of pairs resolved so far.
    pub fn count(&self) -> usize {
        self.relation.count()
    }

    pub fn is_empty(&self) -> bool {
        self.relation.count() == 0
    }

    /// Returns the pair at `index` in insertion order, if within bounds.
    pub fn at(&self, index: usize) -> Option<Pair<R::Source, R::Target>> {
        self.relation.at(index)
    }

    /// Iterates the resolved pairs in insertion order.
    pub fn iter(&self) -> DomainIter<'a, R> {
        DomainIter {
            relation: self.relation,
            index: 0,
        }
    }
}

impl<R> Domain<'_, R>
where
    R: Relation<Error = Infallible>,
{
    /// Resolves `element`, invoking the underlying function on a miss.
    ///
    /// The domain of a surjection is total: over an infallible function
    /// every element has a value, so no `Result` is involved.
    pub fn get(&self, element: R::Source) -> R::Target {
        match self.relation.forward(element) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// The partial reverse view of a relation.
///
/// Obtained from [`Relation::codomain()`]. An element of the codomain has
/// a known pre-image only if some forward lookup has produced it; the
/// underlying function is never run in reverse. Enumeration yields the
/// recorded pairs flipped, with the codomain element in key position.
///
/// # Example
///
/// ```
/// use relation::{Relation, Surjection};
///
/// let doubled = Surjection::new(|x: &i32| x * 2);
/// doubled.domain().get(2);
///
/// let codomain = doubled.codomain();
/// assert_eq!(codomain.get(&4), Some(2));
/// assert_eq!(codomain.get(&6), None);
///
/// let pairs: Vec<(i32, i32)> = codomain.iter().map(Into::into).collect();
/// assert_eq!(pairs, vec![(4, 2)]);
/// ```
pub struct Codomain<'a, R> {
    relation: &'a R,
}

impl<'a, R: Relation> Codomain<'a, R> {
    pub(crate) const fn new(relation: &'a R) -> Self {
        Self { relation }
    }

    /// Returns the first-recorded pre-image of `element`, if one exists.
    pub fn get(&self, element: &R::Target) -> Option<R::Source> {
        self.relation.reverse(element)
    }

    /// The number of pairs resolved so far.
    pub fn count(&self) -> usize {
        self.relation.count()
    }

    pub fn is_empty(&self) -> bool {
        self.relation.count() == 0
    }

    /// Returns the flipped pair at `index` in insertion order, if within
    /// bounds.
    pub fn at(&self, index: usize) -> Option<Pair<R::Target, R::Source>> {
        self.relation.at(index).map(Pair::flip)
    }

    /// Iterates the resolved pairs in insertion order, flipped.
    pub fn iter(&self) -> CodomainIter<'a, R> {
        CodomainIter {
            relation: self.relation,
            index: 0,
        }
    }
}

/// An insertion-ordered iterator over a relation's resolved pairs.
///
/// The iterator is a live projection rather than a snapshot: each step
/// reads the store through the relation, so pairs recorded by interleaved
/// forward lookups are yielded once the iterator reaches them. Calling
/// [`Domain::iter()`] again restarts from the beginning.
pub struct DomainIter<'a, R> {
    relation: &'a R,
    index: usize,
}

impl<R: Relation> Iterator for DomainIter<'_, R> {
    type Item = Pair<R::Source, R::Target>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.relation.at(self.index)?;
        self.index += 1;
        Some(pair)
    }
}

/// The flipped counterpart of [`DomainIter`], yielding `(target, source)`
/// pairs.
pub struct CodomainIter<'a, R> {
    relation: &'a R,
    index: usize,
}

impl<R: Relation> Iterator for CodomainIter<'_, R> {
    type Item = Pair<R::Target, R::Source>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.relation.at(self.index)?;
        self.index += 1;
        Some(pair.flip())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Relation, Surjection};

    #[test]
    fn enumeration_follows_insertion_order() {
        let squares = Surjection::new(|x: &i32| x * x);

        squares.domain().get(2);
        squares.domain().get(-1);
        squares.domain().get(3);

        let pairs: Vec<(i32, i32)> = squares.domain().iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(2, 4), (-1, 1), (3, 9)]);
    }

    #[test]
    fn codomain_enumerates_flipped_pairs() {
        let squares = Surjection::new(|x: &i32| x * x);

        squares.domain().get(2);
        squares.domain().get(3);

        let pairs: Vec<(i32, i32)> = squares.codomain().iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(4, 2), (9, 3)]);
    }

    #[test]
    fn views_observe_growth_live() {
        let doubled = Surjection::new(|x: &i32| x * 2);
        let domain = doubled.domain();

        assert!(domain.is_empty());
        let mut pairs = domain.iter();
        assert_eq!(pairs.next(), None);

        domain.get(1);
        domain.get(2);

        // The exhausted iterator picks the new pairs up; the view is a
        // projection, not a snapshot.
        assert_eq!(pairs.next().map(Into::into), Some((1, 2)));
        assert_eq!(pairs.next().map(Into::into), Some((2, 4)));
        assert_eq!(domain.count(), 2);
    }

    #[test]
    fn indexed_access_is_bounded() {
        let doubled = Surjection::new(|x: &i32| x * 2);
        doubled.domain().get(1);

        assert_eq!(doubled.domain().at(0).map(Into::into), Some((1, 2)));
        assert_eq!(doubled.domain().at(1), None);
        assert_eq!(doubled.codomain().at(0).map(Into::into), Some((2, 1)));
        assert_eq!(doubled.codomain().at(1), None);
    }

    #[test]
    fn restarting_iteration_begins_at_the_first_pair() {
        let doubled = Surjection::new(|x: &i32| x * 2);
        doubled.domain().get(1);
        doubled.domain().get(2);

        let domain = doubled.domain();
        let first: Vec<(i32, i32)> = domain.iter().map(Into::into).collect();
        let second: Vec<(i32, i32)> = domain.iter().map(Into::into).collect();
        assert_eq!(first, second);
    }
}
