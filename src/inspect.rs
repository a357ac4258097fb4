use crate::{store::Pair, Relation};

/// A relation that calls handlers around forward lookups.
///
/// Created by [`Relation::inspect()`]. Everything besides the handler
/// calls passes straight through to the wrapped relation.
pub(crate) struct Inspect<R, OnSource, OnTarget> {
    relation: R,
    on_source: OnSource,
    on_target: OnTarget,
}

impl<R, OnSource, OnTarget> Inspect<R, OnSource, OnTarget> {
    pub(crate) const fn new(relation: R, on_source: OnSource, on_target: OnTarget) -> Self {
        Self {
            relation,
            on_source,
            on_target,
        }
    }
}

impl<R, OnSource, OnTarget> Relation for Inspect<R, OnSource, OnTarget>
where
    R: Relation,
    OnSource: Fn(&R::Source),
    OnTarget: Fn(&R::Target),
{
    type Source = R::Source;
    type Target = R::Target;
    type Error = R::Error;

    /// Runs the handlers and delegates the lookup itself.
    ///
    /// `on_target` runs for cache hits as well as fresh evaluations; a
    /// failed lookup skips it.
    fn forward(&self, element: R::Source) -> Result<R::Target, R::Error> {
        (self.on_source)(&element);
        let value = self.relation.forward(element)?;
        (self.on_target)(&value);
        Ok(value)
    }

    fn reverse(&self, element: &R::Target) -> Option<R::Source> {
        self.relation.reverse(element)
    }

    fn count(&self) -> usize {
        self.relation.count()
    }

    fn at(&self, index: usize) -> Option<Pair<R::Source, R::Target>> {
        self.relation.at(index)
    }
}
