//! UI components.

pub mod ink_field;
