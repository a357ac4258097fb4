use std::{cell::RefCell, convert::Infallible};

use crate::{
    store::{Pair, Store},
    Relation,
};

/// A memoized relation representing a surjective function.
///
/// A `Surjection` wraps a forward function `f` and lazily builds the
/// bidirectional mapping it induces. Looking an element up through the
/// [`domain`](Relation::domain) view invokes `f` at most once per distinct
/// element; the [`codomain`](Relation::codomain) view finds pre-images
/// among the pairs resolved so far and never runs `f`.
///
/// "Surjective" describes the memoized table, not a property the function
/// is checked for: every recorded target has at least one recorded
/// pre-image, because targets only enter the table as images. If two
/// distinct elements map to the same target, reverse lookup returns the
/// first one recorded.
///
/// The pair store uses interior mutability and is not synchronized; a
/// `Surjection` is a single-threaded structure, and calling back into the
/// same surjection from inside `f` is out of contract.
///
/// # Example
///
/// ```
/// use relation::{Relation, Surjection};
///
/// let squares = Surjection::new(|x: &i32| x * x);
///
/// // Nothing has been resolved yet.
/// assert_eq!(squares.codomain().get(&0), None);
///
/// assert_eq!(squares.domain().get(0), 0);
/// assert_eq!(squares.codomain().get(&0), Some(0));
/// ```
pub struct Surjection<F, T, U> {
    function: F,
    store: RefCell<Store<T, U>>,
}

impl<F, T, U> Surjection<F, T, U>
where
    F: Fn(&T) -> U,
{
    /// Constructs a surjection from `function`.
    ///
    /// Construction is fully lazy: `function` is not evaluated until the
    /// domain view is exercised.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            store: RefCell::new(Store::new()),
        }
    }
}

impl<F, T, U> Relation for Surjection<F, T, U>
where
    F: Fn(&T) -> U,
    T: Clone + PartialEq,
    U: Clone + PartialEq,
{
    type Source = T;
    type Target = U;
    type Error = Infallible;

    fn forward(&self, element: T) -> Result<U, Infallible> {
        // The read borrow must end before the function runs, so that a
        // panicking function leaves no borrow behind and the store is
        // touched only by a completed resolution.
        let cached = {
            let store = self.store.borrow();
            store
                .find_by_key(&element)
                .and_then(|index| store.get(index))
                .map(|pair| pair.value.clone())
        };

        if let Some(value) = cached {
            return Ok(value);
        }

        let value = (self.function)(&element);
        self.store
            .borrow_mut()
            .append(Pair::new(element, value.clone()));

        Ok(value)
    }

    fn reverse(&self, element: &U) -> Option<T> {
        let store = self.store.borrow();
        store
            .find_by_value(element)
            .and_then(|index| store.get(index))
            .map(|pair| pair.key.clone())
    }

    fn count(&self) -> usize {
        self.store.borrow().count()
    }

    fn at(&self, index: usize) -> Option<Pair<T, U>> {
        self.store.borrow().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn construction_evaluates_nothing() {
        let calls = Cell::new(0);
        let squares = Surjection::new(|x: &i32| {
            calls.set(calls.get() + 1);
            x * x
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(squares.count(), 0);
    }

    #[test]
    fn forward_matches_the_function_on_first_evaluation() {
        let squares = Surjection::new(|x: &i32| x * x);

        assert_eq!(squares.domain().get(0), 0);
        assert_eq!(squares.domain().get(3), 9);
        assert_eq!(squares.domain().get(-3), 9);
    }

    #[test]
    fn forward_evaluates_each_element_exactly_once() {
        let calls = Cell::new(0);
        let doubled = Surjection::new(|x: &i32| {
            calls.set(calls.get() + 1);
            x * 2
        });

        for _ in 0..5 {
            assert_eq!(doubled.domain().get(4), 8);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(doubled.count(), 1);
    }

    #[test]
    fn reverse_is_absent_until_observed() {
        let squares = Surjection::new(|x: &i32| x * x);

        assert_eq!(squares.codomain().get(&0), None);
        assert_eq!(squares.domain().get(0), 0);
        assert_eq!(squares.codomain().get(&0), Some(0));

        // 4 is the square of 2, but 2 was never looked up.
        assert_eq!(squares.domain().get(3), 9);
        assert_eq!(squares.codomain().get(&9), Some(3));
        assert_eq!(squares.codomain().get(&4), None);
    }

    #[test]
    fn reverse_never_invokes_the_function() {
        let calls = Cell::new(0);
        let squares = Surjection::new(|x: &i32| {
            calls.set(calls.get() + 1);
            x * x
        });

        assert_eq!(squares.codomain().get(&9), None);
        assert_eq!(squares.codomain().get(&16), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn first_recorded_pre_image_wins_reverse_ties() {
        let squares = Surjection::new(|x: &i32| x * x);

        assert_eq!(squares.domain().get(3), 9);
        assert_eq!(squares.domain().get(-3), 9);

        // Both 3 and -3 map to 9; insertion order breaks the tie.
        assert_eq!(squares.codomain().get(&9), Some(3));
        assert_eq!(squares.count(), 2);
    }

    #[test]
    fn count_grows_by_one_per_distinct_element() {
        let doubled = Surjection::new(|x: &i32| x * 2);

        assert_eq!(doubled.count(), 0);
        doubled.domain().get(1);
        assert_eq!(doubled.count(), 1);
        doubled.domain().get(1);
        assert_eq!(doubled.count(), 1);
        doubled.domain().get(2);
        assert_eq!(doubled.count(), 2);
    }

    #[test]
    fn works_with_owned_element_types() {
        let lengths = Surjection::new(|text: &String| text.len());

        assert_eq!(lengths.domain().get("four".to_string()), 4);
        assert_eq!(lengths.codomain().get(&4), Some("four".to_string()));
        assert_eq!(lengths.codomain().get(&5), None);
    }
}
