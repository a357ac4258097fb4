//! A lazily memoized, bidirectional view of a function.
//!
//! Given a forward function `f: T -> U`, a [`Surjection`] exposes two
//! views over the pairs it resolves:
//!
//! - [`Relation::domain()`] — a *total* forward lookup from `T` to `U`
//!   that invokes `f` at most once per distinct element and serves every
//!   later lookup from the recorded pair.
//! - [`Relation::codomain()`] — a *partial* reverse lookup from `U` to
//!   `T` over the pairs resolved so far; `f` is never run in reverse.
//!
//! Both views enumerate the resolved pairs in insertion order, and both
//! observe later growth: they are live projections of the relation's
//! state, not snapshots. Elements only need equality (`PartialEq`), so
//! lookups are linear scans.
//!
//! Fallible functions are covered by [`TrySurjection`], and any
//! [`Relation`] can be chained with [`Relation::then()`] or observed with
//! [`Relation::inspect()`].
//!
//! # Example
//!
//! ```
//! use relation::{Relation, Surjection};
//!
//! let squares = Surjection::new(|x: &i32| x * x);
//!
//! assert_eq!(squares.codomain().get(&9), None);
//! assert_eq!(squares.domain().get(3), 9);
//! assert_eq!(squares.codomain().get(&9), Some(3));
//! ```

mod composed;
mod domain;
mod inspect;
mod relation;
mod store;
mod surjection;
mod try_surjection;

pub use domain::{Codomain, CodomainIter, Domain, DomainIter};
pub use relation::Relation;
pub use store::Pair;
pub use surjection::Surjection;
pub use try_surjection::TrySurjection;
