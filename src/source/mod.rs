//! Input acquisition boundary.
//!
//! The engine itself is pure: it takes curriculum and history slices and
//! returns results. These traits describe where those slices come from, so
//! hosts can plug in an institutional API client, a database, or the
//! in-memory fixture used in tests and demos. Callers fetch through a
//! source and hand the data to [`ProjectionRunner`](crate::engine::ProjectionRunner)
//! themselves.

mod fixture;
mod types;

pub use fixture::FixtureSource;
pub use types::{CurriculumSource, ProgressSource, SourceError};
