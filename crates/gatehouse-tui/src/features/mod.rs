//! Feature slices: state, update, and render per feature.

pub mod form;
