//! Rendering of benchmark results.
//!
//! Presentation is a collaborator of the engine, not part of it: these
//! functions read a finished [`Results`](crate::Results) and never feed
//! anything back into measurement.

pub mod json;
pub mod terminal;
