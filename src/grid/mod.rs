pub mod layout;

pub use layout::{GridLayout, compute_layout};
