//! Public entry points (component H): parse SQL, render a parsed AST back
//! to SQL under a chosen [`FormatOptions`].

use tracing::debug_span;

use pg_query::protobuf::{Node, RawStmt};
use pg_query::NodeEnum;

use crate::error::DeparseError;
use crate::options::FormatOptions;
use crate::print::Printer;

/// Parses `sql` into a libpg_query [`pg_query::ParseResult`]. Each raw
/// statement in the result carries its own [`Node`] tree, see
/// [`statements`].
pub fn parse(sql: &str) -> Result<pg_query::ParseResult, DeparseError> {
    let _span = debug_span!("parse", sql_len = sql.len()).entered();
    pg_query::parse(sql).map_err(DeparseError::from)
}

/// The top-level [`Node`]s (one per statement) of a parse result, each still
/// wrapped in its [`RawStmt`] so rendering applies the statement terminator
/// (see `render_raw_stmt`).
pub fn statements(result: &pg_query::ParseResult) -> Vec<Node> {
    result
        .protobuf
        .stmts
        .iter()
        .map(|raw| Node {
            node: Some(NodeEnum::RawStmt(Box::new(RawStmt {
                stmt: raw.stmt.clone(),
                stmt_location: raw.stmt_location,
                stmt_len: raw.stmt_len,
            }))),
        })
        .collect()
}

/// Renders `node` under `opt`, failing if any part of the tree was not
/// understood (component F failure semantics collected into one error).
pub fn print_with_options(node: &Node, opt: FormatOptions<'_>) -> Result<String, DeparseError> {
    let _span = debug_span!("print", pretty = opt.pretty).entered();
    let mut printer = Printer::new(opt);
    let text = printer.render_node(node);
    match printer.error_message() {
        Some(message) => Err(DeparseError::Printer(message)),
        None => Ok(text),
    }
}

/// Renders `node` compact (single line, minimal whitespace).
pub fn print(node: &Node) -> Result<String, DeparseError> {
    print_with_options(node, FormatOptions::compact())
}

/// Renders `node` pretty (multi-line, indented).
pub fn pretty_print(node: &Node) -> Result<String, DeparseError> {
    print_with_options(node, FormatOptions::pretty())
}

/// Pretty-renders `node` and additionally returns a call trace: one line
/// per dispatched node, indented by tree depth. Intended for debugging
/// rendering decisions, not for production output.
pub fn debug(node: &Node) -> Result<(String, String), DeparseError> {
    let _span = debug_span!("debug_print").entered();
    let mut printer = Printer::with_trace(FormatOptions::pretty());
    let text = printer.render_node(node);
    let trace = printer.trace_text();
    match printer.error_message() {
        Some(message) => Err(DeparseError::Printer(message)),
        None => Ok((text, trace)),
    }
}
