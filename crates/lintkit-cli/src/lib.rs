//! The `lintkit` command: parse a file or snippet and report the expression
//! analyses of `lintkit-ast-utils`.

pub mod args;
pub mod driver;
pub mod reporter;

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
