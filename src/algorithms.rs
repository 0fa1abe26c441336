pub mod support;

#[doc(inline)]
pub use support::{max_dot, min_dot, project, ExtremeHints, Support, SupportHint};
