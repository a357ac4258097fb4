use std::{cell::RefCell, marker::PhantomData};

use crate::{
    store::{Pair, Store},
    Relation,
};

/// A memoized relation over a function that can fail.
///
/// `TrySurjection` is the fallible counterpart of
/// [`Surjection`](crate::Surjection): the wrapped function returns
/// `Result<U, E>`, and forward lookup propagates `E` to the caller
/// unchanged. Only successful applications become recorded pairs, so a
/// failed element is retried on its next lookup.
///
/// # Example
///
/// ```
/// use relation::{Relation, TrySurjection};
///
/// let parsed = TrySurjection::new(|text: &String| text.parse::<i32>());
///
/// assert_eq!(parsed.domain().try_get("42".to_string()), Ok(42));
/// assert_eq!(parsed.codomain().get(&42), Some("42".to_string()));
///
/// assert!(parsed.domain().try_get("not a number".to_string()).is_err());
/// assert_eq!(parsed.count(), 1);
/// ```
pub struct TrySurjection<F, T, U, E> {
    function: F,
    store: RefCell<Store<T, U>>,
    _marker: PhantomData<E>,
}

impl<F, T, U, E> TrySurjection<F, T, U, E>
where
    F: Fn(&T) -> Result<U, E>,
{
    /// Constructs a surjection from a fallible `function`.
    ///
    /// As with [`Surjection::new()`](crate::Surjection::new), construction
    /// evaluates nothing.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            store: RefCell::new(Store::new()),
            _marker: PhantomData,
        }
    }
}

impl<F, T, U, E> Relation for TrySurjection<F, T, U, E>
where
    F: Fn(&T) -> Result<U, E>,
    T: Clone + PartialEq,
    U: Clone + PartialEq,
    E: std::error::Error + Send + Sync + 'static,
{
    type Source = T;
    type Target = U;
    type Error = E;

    fn forward(&self, element: T) -> Result<U, E> {
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

        // An Err records nothing; the pair invariant covers resolved
        // applications only.
        let value = (self.function)(&element)?;
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
