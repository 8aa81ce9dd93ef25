//! Table and parameter extraction, and `@name` → `$n` rewriting.

use pg_query::protobuf::Node;
use pg_query::NodeEnum;
use serde::Serialize;

use crate::error::DeparseError;
use crate::visitor::{self, Step};

/// A table reference discovered while walking the tree. `alias`, when
/// present, is the `AS` name attached to the `RangeVar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    pub catalog: String,
    pub schema: String,
    pub table: String,
    pub alias: Option<String>,
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.schema.is_empty() {
            write!(f, "{}.{}", self.schema, self.table)
        } else {
            write!(f, "{}", self.table)
        }
    }
}

/// A named parameter discovered under an `@`-operator `AExpr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: String,
    pub type_name: Option<String>,
}

impl std::fmt::Display for QueryParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered, lookup-by-name collection of [`QueryParam`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Params(pub Vec<QueryParam>);

impl Params {
    /// 1-based position of `name`, or `-1` if absent (matches the original
    /// `IndexOf` contract).
    pub fn index_of(&self, name: &str) -> i64 {
        self.0
            .iter()
            .position(|p| p.name == name)
            .map(|i| (i + 1) as i64)
            .unwrap_or(-1)
    }
}

/// Walks `node`, collecting a [`TableRef`] for every `RangeVar` encountered.
/// Does not descend into a `RangeVar`'s own fields (it has none of
/// interest), so nested references inside, e.g., a subselect's own
/// `RangeVar`s are still visited — traversal only stops locally at the
/// `RangeVar` node itself.
pub fn extract_tables(node: &Node) -> Vec<TableRef> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    visitor::walk(node, &mut stack, &mut |n, _stack| {
        if let Some(NodeEnum::RangeVar(rv)) = &n.node {
            out.push(TableRef {
                catalog: rv.catalogname.clone(),
                schema: rv.schemaname.clone(),
                table: rv.relname.clone(),
                alias: rv.alias.as_ref().map(|a| a.aliasname.clone()),
            });
            return Step::Stop;
        }
        Step::Continue
    });
    out
}

/// Walks `node`, collecting a [`QueryParam`] for every `AExpr` whose
/// operator name is exactly `["@"]`. The parameter's name is taken from the
/// `ColumnRef` (dotted field path) or `TypeCast` argument on the side
/// opposite the `@`-literal.
pub fn extract_params(node: &Node) -> Params {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    visitor::walk(node, &mut stack, &mut |n, _stack| {
        if let Some(NodeEnum::AExpr(a)) = &n.node
            && is_at_operator(a)
            && let Some(reference) = find_reference(a)
        {
            out.push(reference);
        }
        Step::Continue
    });
    Params(out)
}

fn is_at_operator(a: &pg_query::protobuf::AExpr) -> bool {
    a.name.len() == 1
        && matches!(
            &a.name[0].node,
            Some(NodeEnum::String(s)) if s.sval == "@"
        )
}

/// The `@name` convention places the parameter name in a `ColumnRef` (or a
/// `TypeCast` wrapping one) on one side of the `AExpr`; find it regardless
/// of which side the parser put it on.
fn find_reference(a: &pg_query::protobuf::AExpr) -> Option<QueryParam> {
    for side in [&a.lexpr, &a.rexpr] {
        if let Some(boxed) = side
            && let Some(param) = reference_in(boxed)
        {
            return Some(param);
        }
    }
    None
}

fn reference_in(node: &Node) -> Option<QueryParam> {
    match &node.node {
        Some(NodeEnum::ColumnRef(cr)) => Some(QueryParam {
            name: column_ref_name(cr),
            type_name: None,
        }),
        Some(NodeEnum::TypeCast(tc)) => {
            let arg = tc.arg.as_deref()?;
            let NodeEnum::ColumnRef(cr) = arg.node.as_ref()? else {
                return None;
            };
            let type_name = tc
                .type_name
                .as_ref()
                .and_then(|t| t.names.last())
                .and_then(|n| match &n.node {
                    Some(NodeEnum::String(s)) => Some(s.sval.clone()),
                    _ => None,
                });
            Some(QueryParam {
                name: column_ref_name(cr),
                type_name,
            })
        }
        _ => None,
    }
}

fn column_ref_name(cr: &pg_query::protobuf::ColumnRef) -> String {
    cr.fields
        .iter()
        .filter_map(|f| match &f.node {
            Some(NodeEnum::String(s)) => Some(s.sval.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Replaces every `@name` `AExpr` under `root` with a `ParamRef` whose
/// `number` is the parameter's 1-based position in `params`. Fails with
/// [`DeparseError::InvalidParam`] on the first name absent from `params`.
pub fn replace_params(root: &mut Node, params: &Params) -> Result<(), DeparseError> {
    let mut err = None;
    let mut stack = Vec::new();
    visitor::mutate(root, &mut stack, &mut |n, _stack| {
        if err.is_some() {
            return Step::Stop;
        }
        let is_at = matches!(&n.node, Some(NodeEnum::AExpr(a)) if is_at_operator(a));
        if !is_at {
            return Step::Continue;
        }
        let Some(NodeEnum::AExpr(a)) = &n.node else {
            unreachable!()
        };
        let Some(reference) = find_reference(a) else {
            return Step::Continue;
        };
        let index = params.index_of(&reference.name);
        if index < 0 {
            err = Some(DeparseError::InvalidParam(reference.name));
            return Step::Stop;
        }
        n.node = Some(NodeEnum::ParamRef(Box::new(pg_query::protobuf::ParamRef {
            number: index as i32,
            location: 0,
        })));
        Step::Stop
    });
    match err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Node {
        let result = pg_query::parse(sql).unwrap();
        *result.protobuf.stmts[0].stmt.clone().unwrap()
    }

    #[test]
    fn extract_tables_preserves_order() {
        let root = parse("WITH t AS (SELECT id FROM x WHERE id > 100) DELETE FROM a USING t");
        let tables: Vec<_> = extract_tables(&root).into_iter().map(|t| t.table).collect();
        assert_eq!(tables, vec!["a", "x"]);
    }

    #[test]
    fn extract_params_finds_at_names() {
        let root = parse("select * from foo where id = @myParam");
        let params = extract_params(&root);
        assert_eq!(params.0.len(), 1);
        assert_eq!(params.0[0].name, "myParam");
    }

    #[test]
    fn extract_params_typed() {
        let root = parse("select * from foo where id = @myParam::int");
        let params = extract_params(&root);
        assert_eq!(params.0[0].name, "myParam");
        assert_eq!(params.0[0].type_name.as_deref(), Some("int4"));
    }

    #[test]
    fn params_index_of() {
        let params = Params(vec![
            QueryParam { name: "a".into(), type_name: None },
            QueryParam { name: "b".into(), type_name: None },
        ]);
        assert_eq!(params.index_of("a"), 1);
        assert_eq!(params.index_of("b"), 2);
        assert_eq!(params.index_of("nope"), -1);
    }

    #[test]
    fn replace_params_missing_name_errors() {
        let mut root = parse("select * from foo where id = @nope");
        let err = replace_params(&mut root, &Params::default()).unwrap_err();
        assert!(matches!(err, DeparseError::InvalidParam(name) if name == "nope"));
    }

    #[test]
    fn table_ref_serializes_to_json() {
        let root = parse("select * from foo");
        let tables = extract_tables(&root);
        let json = serde_json::to_string(&tables).unwrap();
        assert!(json.contains("\"table\":\"foo\""));
    }
}
