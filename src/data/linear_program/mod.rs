//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain any type of constraint and named variables, while linear programs in standard
//! form only have `<=` constraints and are maximized.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;
