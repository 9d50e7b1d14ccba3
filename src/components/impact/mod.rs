//! Personal eco-impact tracker.

mod impact;

pub use impact::ImpactPage;
