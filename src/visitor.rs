//! Generic pre-order tree traversal over a `pg_query` AST.
//!
//! Two entry points: [`walk`] (read-only, observer decides whether to
//! descend) and [`mutate`] (the observer gets a mutable handle to the
//! current slot and may replace the node). Both visit children in the
//! order they appear in their owning list, matching the field order used
//! throughout `src/print`.

use pg_query::protobuf::Node;
use pg_query::NodeEnum;

/// Result of a single `visit` call: whether to descend into the node's
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Walks `node` and its descendants in pre-order, calling `visit` at each
/// one. `stack` holds the ancestor chain (parent last); children of a node
/// that returned [`Step::Stop`] are not visited.
pub fn walk<F>(node: &Node, stack: &mut Vec<Node>, visit: &mut F)
where
    F: FnMut(&Node, &[Node]) -> Step,
{
    if visit(node, stack) == Step::Stop {
        return;
    }
    stack.push(node.clone());
    for child in children(node) {
        walk(&child, stack, visit);
    }
    stack.pop();
}

/// Same traversal shape as [`walk`], but `mutate_fn` receives a mutable
/// handle to the current slot and may replace the node in place. Used by
/// `replace_params` to splice `ParamRef` nodes into `AExpr` positions.
pub fn mutate<F>(root: &mut Node, stack: &mut Vec<Node>, mutate_fn: &mut F)
where
    F: FnMut(&mut Node, &[Node]) -> Step,
{
    if mutate_fn(root, stack) == Step::Stop {
        return;
    }
    stack.push(root.clone());
    for_each_child_mut(root, &mut |child| mutate(child, stack, mutate_fn));
    stack.pop();
}

/// Returns the direct children of `node`, in AST order. Node kinds with no
/// modeled children (leaves, and statement/expression kinds this crate does
/// not render) yield an empty vector; traversal simply does not descend
/// into them, which is sound since nothing below them would be reachable
/// from a rendering or extraction pass that does not understand the
/// parent either.
fn children(node: &Node) -> Vec<Node> {
    let Some(inner) = &node.node else {
        return Vec::new();
    };
    match inner {
        NodeEnum::RawStmt(s) => opt(&s.stmt),
        NodeEnum::SelectStmt(s) => {
            let mut out = Vec::new();
            out.extend(s.with_clause.as_deref().cloned());
            out.extend(s.distinct_clause.iter().cloned());
            out.extend(s.target_list.iter().cloned());
            out.extend(s.from_clause.iter().cloned());
            out.extend(s.where_clause.iter().map(|b| (**b).clone()));
            out.extend(s.values_lists.iter().cloned());
            out.extend(s.group_clause.iter().cloned());
            out.extend(s.having_clause.iter().map(|b| (**b).clone()));
            out.extend(s.window_clause.iter().cloned());
            out.extend(s.sort_clause.iter().cloned());
            out.extend(s.locking_clause.iter().cloned());
            out
        }
        NodeEnum::InsertStmt(s) => {
            let mut out = Vec::new();
            out.extend(range_var(&s.relation));
            out.extend(s.cols.iter().cloned());
            out.extend(opt(&s.select_stmt));
            out.extend(opt(&s.with_clause));
            out.extend(s.returning_list.iter().cloned());
            out
        }
        NodeEnum::UpdateStmt(s) => {
            let mut out = Vec::new();
            out.extend(range_var(&s.relation));
            out.extend(s.target_list.iter().cloned());
            out.extend(s.from_clause.iter().cloned());
            out.extend(s.where_clause.iter().map(|b| (**b).clone()));
            out.extend(s.returning_list.iter().cloned());
            out.extend(opt(&s.with_clause));
            out
        }
        NodeEnum::DeleteStmt(s) => {
            let mut out = Vec::new();
            out.extend(range_var(&s.relation));
            out.extend(s.using_clause.iter().cloned());
            out.extend(s.where_clause.iter().map(|b| (**b).clone()));
            out.extend(s.returning_list.iter().cloned());
            out.extend(opt(&s.with_clause));
            out
        }
        NodeEnum::WithClause(w) => w.ctes.clone(),
        NodeEnum::CommonTableExpr(c) => opt(&c.ctequery),
        NodeEnum::JoinExpr(j) => {
            let mut out = Vec::new();
            out.extend(opt(&j.larg));
            out.extend(opt(&j.rarg));
            out.extend(opt(&j.quals));
            out
        }
        NodeEnum::RangeSubselect(r) => opt(&r.subquery),
        NodeEnum::ResTarget(r) => opt(&r.val),
        NodeEnum::List(l) => l.items.clone(),
        NodeEnum::AExpr(a) => {
            let mut out = Vec::new();
            out.extend(opt(&a.lexpr));
            out.extend(opt(&a.rexpr));
            out
        }
        NodeEnum::BoolExpr(b) => b.args.clone(),
        NodeEnum::TypeCast(t) => opt(&t.arg),
        NodeEnum::FuncCall(f) => f.args.clone(),
        NodeEnum::CaseExpr(c) => {
            let mut out = Vec::new();
            out.extend(opt(&c.arg));
            out.extend(c.args.clone());
            out.extend(opt(&c.defresult));
            out
        }
        NodeEnum::CaseWhen(c) => {
            let mut out = Vec::new();
            out.extend(opt(&c.expr));
            out.extend(opt(&c.result));
            out
        }
        NodeEnum::CoalesceExpr(c) => c.args.clone(),
        NodeEnum::NullTest(n) => opt(&n.arg),
        NodeEnum::SubLink(s) => {
            let mut out = Vec::new();
            out.extend(opt(&s.testexpr));
            out.extend(opt(&s.subselect));
            out
        }
        NodeEnum::RowExpr(r) => r.args.clone(),
        NodeEnum::AArrayExpr(a) => a.elements.clone(),
        NodeEnum::NamedArgExpr(n) => opt(&n.arg),
        // Leaves and not-yet-modeled variants: nothing reachable below them.
        _ => Vec::new(),
    }
}

fn opt(node: &Option<Box<Node>>) -> Vec<Node> {
    node.iter().map(|b| (**b).clone()).collect()
}

/// Wraps a statement's target `RangeVar` (e.g. `InsertStmt.relation`) as a
/// one-element child list so `extract_tables` sees it during traversal.
fn range_var(rel: &Option<pg_query::protobuf::RangeVar>) -> Vec<Node> {
    rel.iter()
        .map(|r| Node {
            node: Some(NodeEnum::RangeVar(Box::new(r.clone()))),
        })
        .collect()
}

/// Applies `f` to every direct child slot of `node` that [`children`] would
/// enumerate, giving `f` the chance to replace a node in place.
///
/// Only the slots `replace_params` actually needs to mutate through are
/// covered; this mirrors `children` above but holds `&mut Node` handles.
fn for_each_child_mut<F>(node: &mut Node, f: &mut F)
where
    F: FnMut(&mut Node),
{
    let Some(inner) = &mut node.node else {
        return;
    };
    match inner {
        NodeEnum::RawStmt(s) => {
            if let Some(stmt) = s.stmt.as_deref_mut() {
                f(stmt);
            }
        }
        NodeEnum::SelectStmt(s) => {
            for n in &mut s.target_list {
                f(n);
            }
            for n in &mut s.from_clause {
                f(n);
            }
            if let Some(w) = s.where_clause.as_deref_mut() {
                f(w);
            }
            for n in &mut s.group_clause {
                f(n);
            }
            if let Some(h) = s.having_clause.as_deref_mut() {
                f(h);
            }
            for n in &mut s.sort_clause {
                f(n);
            }
        }
        NodeEnum::UpdateStmt(s) => {
            for n in &mut s.target_list {
                f(n);
            }
            if let Some(w) = s.where_clause.as_deref_mut() {
                f(w);
            }
        }
        NodeEnum::DeleteStmt(s) => {
            if let Some(w) = s.where_clause.as_deref_mut() {
                f(w);
            }
        }
        NodeEnum::ResTarget(r) => {
            if let Some(v) = r.val.as_deref_mut() {
                f(v);
            }
        }
        NodeEnum::List(l) => {
            for n in &mut l.items {
                f(n);
            }
        }
        NodeEnum::AExpr(a) => {
            if let Some(l) = a.lexpr.as_deref_mut() {
                f(l);
            }
            if let Some(r) = a.rexpr.as_deref_mut() {
                f(r);
            }
        }
        NodeEnum::BoolExpr(b) => {
            for n in &mut b.args {
                f(n);
            }
        }
        NodeEnum::TypeCast(t) => {
            if let Some(a) = t.arg.as_deref_mut() {
                f(a);
            }
        }
        NodeEnum::FuncCall(fc) => {
            for n in &mut fc.args {
                f(n);
            }
        }
        NodeEnum::JoinExpr(j) => {
            if let Some(l) = j.larg.as_deref_mut() {
                f(l);
            }
            if let Some(r) = j.rarg.as_deref_mut() {
                f(r);
            }
            if let Some(q) = j.quals.as_deref_mut() {
                f(q);
            }
        }
        _ => {}
    }
}
