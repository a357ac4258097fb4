use std::cell::RefCell;

use crate::{
    store::{Pair, Store},
    Relation,
};

/// A relation that feeds one relation's targets into another.
///
/// Created by [`Relation::then()`]. The composition keeps its own store of
/// observed end-to-end pairs, so its reverse lookup and enumeration cover
/// exactly the elements that were resolved *through* it; each stage still
/// records its own pairs independently.
pub(crate) struct Composed<A: Relation, B: Relation> {
    first: A,
    second: B,
    store: RefCell<Store<A::Source, B::Target>>,
}

impl<A, B> Composed<A, B>
where
    A: Relation,
    B: Relation<Source = A::Target, Error = A::Error>,
{
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            store: RefCell::new(Store::new()),
        }
    }
}

impl<A, B> Relation for Composed<A, B>
where
    A: Relation,
    A::Source: Clone + PartialEq,
    B: Relation<Source = A::Target, Error = A::Error>,
    B::Target: Clone + PartialEq,
{
    type Source = A::Source;
    type Target = B::Target;
    type Error = A::Error;

    fn forward(&self, element: A::Source) -> Result<B::Target, A::Error> {
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

        // An error from either stage leaves the end-to-end store untouched.
        let middle = self.first.forward(element.clone())?;
        let value = self.second.forward(middle)?;
        self.store
            .borrow_mut()
            .append(Pair::new(element, value.clone()));

        Ok(value)
    }

    fn reverse(&self, element: &B::Target) -> Option<A::Source> {
        let store = self.store.borrow();
        store
            .find_by_value(element)
            .and_then(|index| store.get(index))
            .map(|pair| pair.key.clone())
    }

    fn count(&self) -> usize {
        self.store.borrow().count()
    }

    fn at(&self, index: usize) -> Option<Pair<A::Source, B::Target>> {
        self.store.borrow().get(index).cloned()
    }
}
