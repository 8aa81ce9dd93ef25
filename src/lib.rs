//! pg-deparser: renders PostgreSQL parse trees (as produced by
//! `libpg_query`) back to SQL text.
//!
//! The pipeline is parse ([`parse`]) → optional AST surgery ([`extract`],
//! [`visitor`]) → render ([`print`], [`parse::print`]/[`parse::pretty_print`]).
//! Rendering never panics: a node variant this crate does not model records
//! an error and renders empty, see [`print::Printer`].

pub mod builder;
pub mod enums;
pub mod error;
pub mod extract;
pub mod interval;
pub mod keyword;
pub mod options;
pub mod parse;
pub mod print;
pub mod visitor;

pub use error::DeparseError;
pub use extract::{extract_params, extract_tables, replace_params, Params, QueryParam, TableRef};
pub use options::FormatOptions;
pub use parse::{debug, parse, pretty_print, print, print_with_options, statements};
