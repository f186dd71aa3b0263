//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const LP_LITERAL_STRING`
//! * `fn general_form()`
//! * `fn standard_form()`
//! * `fn ..._standard_form()` for variations that don't have a text form
pub mod problem_4;
