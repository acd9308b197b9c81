//! Typed assertion surfaces
//!
//! Each submodule attaches one family of checks to [`Subject`](crate::Subject)
//! through inherent impl blocks. The checking logic of a family lives in
//! shared helper functions; the per-container methods (`str` next to
//! `String`, `[T]` next to `Vec<T>`) are thin delegates over them.
//!
//! The panicking family is the exception: it owns the outcome of a closure
//! instead of borrowing a value, so it has its own subject type and entry
//! point ([`panicking::assert_that_code`](crate::assert_that_code)).

pub mod boolean;
pub mod map;
pub mod numeric;
pub mod option;
pub mod ordered;
pub mod panicking;
pub mod path;
pub mod result;
pub mod sequence;
pub mod string;
