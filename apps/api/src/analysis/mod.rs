// Document analysis: keyword category coverage, profile link extraction, and
// the combined overall match percentage. Everything here is a pure function
// over extracted text; handlers are thin wrappers.

pub mod analyzer;
pub mod categories;
pub mod handlers;
pub mod links;
