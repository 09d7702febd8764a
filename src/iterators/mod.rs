pub mod diamond;

pub use diamond::{DiamondSpans, Span};
