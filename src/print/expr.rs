//! Expression, leaf, and structural node rendering (everything in the
//! dispatch table that isn't a full statement or a DDL piece; see
//! `print::stmt` and `print::ddl`).

use pg_query::protobuf::{
    a_const, AArrayExpr, AConst, AExpr, AExprKind, Alias, BoolExpr, BoolExprType, CaseExpr,
    CaseWhen, CoalesceExpr, ColumnRef, CurrentOfExpr, FuncCall, JoinExpr, JoinType, LockWaitPolicy,
    LockingClause, MultiAssignRef, NamedArgExpr, Node, NullTest, NullTestType, ParamRef,
    RangeFunction, RangeSubselect, RangeVar, ResTarget, RowExpr, SqlvalueFunction, SubLink,
    TypeCast, WindowDef,
};
use pg_query::NodeEnum;

use crate::enums;

use super::Printer;

impl Printer<'_> {
    pub(super) fn render_list(&mut self, items: &[Node], sep: &str) -> String {
        let mut b = self.builder();
        for item in items {
            b.append(&self.render_node_ref(item));
        }
        b.join(sep)
    }

    /// Helper: `render_node` takes `&mut self`, so rendering a slice of
    /// children one at a time needs a small indirection to keep the
    /// borrow checker happy around `self.builder()` above.
    fn render_node_ref(&mut self, node: &Node) -> String {
        self.render_node(node)
    }

    pub(super) fn render_a_const(&mut self, c: &AConst) -> String {
        use a_const::Val;
        match &c.val {
            Some(Val::Ival(i)) => i.ival.to_string(),
            Some(Val::Fval(f)) => f.fval.clone(),
            Some(Val::Sval(s)) => format!("'{}'", s.sval.replace('\'', "''")),
            Some(Val::Boolval(b)) => if b.boolval { "true" } else { "false" }.to_string(),
            Some(Val::Bsval(s)) => format!("B'{}'", s.bsval.trim_start_matches('b')),
            None => "NULL".to_string(),
        }
    }

    pub(super) fn render_column_ref(&mut self, cr: &ColumnRef) -> String {
        let mut parts = Vec::new();
        for f in &cr.fields {
            match &f.node {
                Some(NodeEnum::String(s)) => parts.push(s.sval.clone()),
                Some(NodeEnum::AStar(_)) => parts.push("*".to_string()),
                _ => {}
            }
        }
        let mut b = self.builder();
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        if refs.last() == Some(&"*") {
            let (ident, _) = refs.split_at(refs.len() - 1);
            if ident.is_empty() {
                return "*".to_string();
            }
            b.identifier(ident);
            b.add_to_last(".*");
        } else {
            b.identifier(&refs);
        }
        b.join("")
    }

    pub(super) fn render_param_ref(&mut self, p: &ParamRef) -> String {
        if p.number == 0 {
            "?".to_string()
        } else {
            format!("${}", p.number)
        }
    }

    pub(super) fn render_alias(&mut self, a: &Alias) -> String {
        let mut b = self.builder();
        b.keyword("AS");
        b.identifier(&[a.aliasname.as_str()]);
        if !a.colnames.is_empty() {
            let cols = self.render_list(&a.colnames, ", ");
            b.append(&format!("({cols})"));
        }
        b.join(" ")
    }

    pub(super) fn render_range_var(&mut self, rv: &RangeVar, emit_only: bool) -> String {
        let mut b = self.builder();
        b.keyword_if("ONLY", emit_only && !rv.inh);
        let mut parts: Vec<&str> = Vec::new();
        if !rv.catalogname.is_empty() {
            parts.push(&rv.catalogname);
        }
        if !rv.schemaname.is_empty() {
            parts.push(&rv.schemaname);
        }
        parts.push(&rv.relname);
        b.identifier(&parts);
        if let Some(alias) = &rv.alias {
            let alias_text = self.render_alias(alias);
            b.append(&alias_text);
        }
        b.join(" ")
    }

    pub(super) fn render_res_target(&mut self, r: &ResTarget) -> String {
        let val = r.val.as_deref().map(|v| self.render_node(v)).unwrap_or_default();
        let mut b = self.builder();
        b.append(&val);
        if !r.name.is_empty() {
            b.keyword("AS");
            b.identifier(&[r.name.as_str()]);
        }
        b.join(" ")
    }

    pub(super) fn render_a_expr(&mut self, e: &AExpr) -> String {
        let op = e
            .name
            .first()
            .and_then(|n| match &n.node {
                Some(NodeEnum::String(s)) => Some(s.sval.clone()),
                _ => None,
            })
            .unwrap_or_default();
        let left = e.lexpr.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let right_node = e.rexpr.as_deref();

        match e.kind() {
            AExprKind::AexprOp => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                let mut b = self.builder();
                b.append(&left);
                b.append(&op);
                b.append(&right);
                b.join(" ")
            }
            AExprKind::AexprOpAny => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                format!("{left} {op} ANY({right})")
            }
            AExprKind::AexprOpAll => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                format!("{left} {op} ALL({right})")
            }
            AExprKind::AexprIn => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                let kw = if op == "=" { "IN" } else { "NOT IN" };
                format!("{left} {kw} ({right})")
            }
            AExprKind::AexprLike => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                let kw = if op == "~~" { "LIKE" } else { "NOT LIKE" };
                format!("{left} {kw} {right}")
            }
            AExprKind::AexprIlike => {
                let right = right_node.map(|n| self.render_node(n)).unwrap_or_default();
                let kw = if op == "~~*" { "ILIKE" } else { "NOT ILIKE" };
                format!("{left} {kw} {right}")
            }
            AExprKind::AexprSimilar => {
                let right_text = right_node
                    .map(|n| self.unwrap_similar_escape(n))
                    .unwrap_or_default();
                format!("{left} SIMILAR TO {right_text}")
            }
            AExprKind::AexprBetween | AExprKind::AexprNotBetween => {
                let Some(NodeEnum::List(list)) = right_node.and_then(|n| n.node.as_ref()) else {
                    self.record_error("BETWEEN requires a two-element list");
                    return String::new();
                };
                if list.items.len() != 2 {
                    self.record_error("BETWEEN requires exactly two bounds");
                    return String::new();
                }
                let low = self.render_node(&list.items[0]);
                let high = self.render_node(&list.items[1]);
                let kw = if matches!(e.kind(), AExprKind::AexprNotBetween) {
                    "NOT BETWEEN"
                } else {
                    "BETWEEN"
                };
                format!("{left} {kw} {low} AND {high}")
            }
            other => {
                self.record_error(format!("A_Expr kind {other:?} not implemented"));
                String::new()
            }
        }
    }

    /// `SIMILAR TO` unwraps a call to `pg_catalog.similar_escape` (or its
    /// later rename, `similar_to_escape`) with a `NULL` escape argument,
    /// emitting just the pattern. Both names are checked since the function
    /// was renamed across PostgreSQL versions.
    fn unwrap_similar_escape(&mut self, node: &Node) -> String {
        if let Some(NodeEnum::FuncCall(fc)) = &node.node {
            let name = fc
                .funcname
                .last()
                .and_then(|n| match &n.node {
                    Some(NodeEnum::String(s)) => Some(s.sval.as_str()),
                    _ => None,
                })
                .unwrap_or("");
            let is_escape_fn = name == "similar_escape" || name == "similar_to_escape";
            let escape_is_null = fc
                .args
                .get(1)
                .map(|n| matches!(&n.node, Some(NodeEnum::AConst(a)) if a.val.is_none()))
                .unwrap_or(false);
            if is_escape_fn && escape_is_null {
                if let Some(pattern) = fc.args.first() {
                    return self.render_node(pattern);
                }
            }
        }
        self.render_node(node)
    }

    pub(super) fn render_bool_expr(&mut self, e: &BoolExpr) -> String {
        let op_word = match e.boolop() {
            BoolExprType::OrExpr => "OR",
            BoolExprType::NotExpr => "NOT",
            _ => "AND",
        };

        if e.boolop() == BoolExprType::NotExpr {
            let inner = e.args.first().map(|n| self.render_node(n)).unwrap_or_default();
            return format!("NOT {inner}");
        }

        let is_or = op_word == "OR";
        let mut rendered = Vec::with_capacity(e.args.len());
        for arg in &e.args {
            let needs_parens = is_or_under_and(arg, is_or) || (is_or && is_bool_expr(arg));
            let text = self.render_node(arg);
            rendered.push(if needs_parens {
                format!("({text})")
            } else {
                text
            });
        }

        if rendered.len() == 1 {
            return rendered.into_iter().next().unwrap();
        }

        let sep = if self.opt.pretty {
            format!("\n{op_word} ")
        } else {
            format!("{op_word} ")
        };
        let mut b = self.builder();
        for (i, r) in rendered.into_iter().enumerate() {
            if i > 0 {
                b.append(&sep);
            }
            b.append(&r);
        }
        b.join(" ")
    }

    pub(super) fn render_join_expr(&mut self, j: &JoinExpr) -> String {
        let larg = j.larg.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let mut b = self.builder();
        b.append(&larg);
        b.line_feed();

        let kind = match j.jointype() {
            JoinType::JoinInner if j.is_natural => "NATURAL",
            JoinType::JoinInner if j.quals.is_none() && j.using_clause.is_empty() => "CROSS",
            JoinType::JoinLeft => "LEFT",
            JoinType::JoinRight => "RIGHT",
            JoinType::JoinFull => "FULL",
            _ => "",
        };
        b.keyword_if(kind, !kind.is_empty());
        b.keyword("JOIN");

        let rarg = j.rarg.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        b.append(&rarg);

        if let Some(quals) = &j.quals {
            let quals_text = self.render_node(quals);
            b.keyword("ON");
            b.append(&quals_text);
        }
        if !j.using_clause.is_empty() {
            let cols = self.render_list(&j.using_clause, ", ");
            b.keyword("USING");
            b.append(&format!("({cols})"));
        }
        b.join(" ")
    }

    pub(super) fn render_type_cast(&mut self, t: &TypeCast) -> String {
        let arg = t.arg.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let ty = t
            .type_name
            .as_ref()
            .map(|tn| self.render_type_name(tn))
            .unwrap_or_default();
        format!("{arg}::{ty}")
    }

    pub(super) fn render_func_call(&mut self, f: &FuncCall) -> String {
        let name = f
            .funcname
            .iter()
            .filter_map(|n| match &n.node {
                Some(NodeEnum::String(s)) => Some(s.sval.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(".");
        let mut inner = self.builder();
        inner.keyword_if("DISTINCT", f.agg_distinct);
        if f.agg_star {
            inner.append("*");
        } else {
            let args = self.render_list(&f.args, ", ");
            inner.append(&args);
        }
        let call = format!("{name}({})", inner.join(" "));
        match &f.over {
            Some(over) => {
                let window = self.render_window_def(over);
                format!("{call} OVER {window}")
            }
            None => call,
        }
    }

    /// `OVER w` (a bare reference to a named window) carries the name in
    /// `refname` with no clauses of its own; print it bare rather than as an
    /// empty `()`. A definition in a `WINDOW` list carries its own `name`
    /// instead, printed as `name AS (...)`.
    pub(super) fn render_window_def(&mut self, w: &WindowDef) -> String {
        if !w.refname.is_empty() && w.partition_clause.is_empty() && w.order_clause.is_empty() {
            return w.refname.clone();
        }
        let mut b = self.builder();
        if !w.partition_clause.is_empty() {
            b.keyword("PARTITION BY");
            let cols = self.render_list(&w.partition_clause, ", ");
            b.append(&cols);
        }
        if !w.order_clause.is_empty() {
            b.keyword("ORDER BY");
            let cols = self.render_list(&w.order_clause, ", ");
            b.append(&cols);
        }
        let body = format!("({})", b.join(" "));
        if !w.name.is_empty() {
            format!("{} AS {body}", w.name)
        } else {
            body
        }
    }

    pub(super) fn render_range_subselect(&mut self, r: &RangeSubselect) -> String {
        let sub = r
            .subquery
            .as_deref()
            .map(|n| self.render_node(n))
            .unwrap_or_default();
        let mut b = self.builder();
        b.keyword_if("LATERAL", r.lateral);
        b.append(&format!("({sub})"));
        if let Some(alias) = &r.alias {
            let alias_text = self.render_alias(alias);
            b.append(&alias_text);
        }
        b.join(" ")
    }

    pub(super) fn render_range_function(&mut self, r: &RangeFunction) -> String {
        let mut b = self.builder();
        b.keyword_if("LATERAL", r.lateral);
        let mut functions = Vec::with_capacity(r.functions.len());
        for n in &r.functions {
            let text = match &n.node {
                Some(NodeEnum::List(l)) => l.items.first().map(|f| self.render_node(f)).unwrap_or_default(),
                _ => self.render_node(n),
            };
            functions.push(text);
        }
        b.append(&functions.join(", "));
        b.keyword_if("WITH ORDINALITY", r.ordinality);
        if let Some(alias) = &r.alias {
            let alias_text = self.render_alias(alias);
            b.append(&alias_text);
        }
        if !r.coldeflist.is_empty() {
            let cols = self.render_list(&r.coldeflist, ", ");
            b.append(&format!("({cols})"));
        }
        b.join(" ")
    }

    pub(super) fn render_locking_clause(&mut self, l: &LockingClause) -> String {
        let kw = enums::lock_clause_strength(l.strength());
        if kw.is_empty() {
            self.record_error(format!("LockClauseStrength {:?} not implemented", l.strength()));
            return String::new();
        }
        let mut b = self.builder();
        b.keyword("FOR");
        b.keyword(kw);
        if !l.locked_rels.is_empty() {
            b.keyword("OF");
            let rels = self.render_list(&l.locked_rels, ", ");
            b.append(&rels);
        }
        match l.wait_policy() {
            LockWaitPolicy::LockWaitSkip => b.keyword("SKIP LOCKED"),
            LockWaitPolicy::LockWaitError => b.keyword("NOWAIT"),
            _ => &mut b,
        };
        b.join(" ")
    }

    pub(super) fn render_multi_assign_ref(&mut self, m: &MultiAssignRef) -> String {
        let source = m.source.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        format!("({source})")
    }

    pub(super) fn render_sql_value_function(&mut self, s: &SqlvalueFunction) -> String {
        let kw = enums::sql_value_function_op(s.op());
        if kw.is_empty() {
            self.record_error(format!("SQLValueFunctionOp {:?} not implemented", s.op()));
        }
        kw.to_string()
    }

    pub(super) fn render_current_of_expr(&mut self, c: &CurrentOfExpr) -> String {
        format!("CURRENT OF {}", c.cursor_name)
    }

    pub(super) fn render_case_expr(&mut self, c: &CaseExpr) -> String {
        let mut b = self.builder();
        b.keyword("CASE");
        if let Some(arg) = &c.arg {
            let arg_text = self.render_node(arg);
            b.append(&arg_text);
        }
        for when in &c.args {
            let when_text = self.render_node(when);
            b.append(&when_text);
        }
        if let Some(def) = &c.defresult {
            let def_text = self.render_node(def);
            b.keyword("ELSE");
            b.append(&def_text);
        }
        b.keyword("END");
        b.join(" ")
    }

    pub(super) fn render_case_when(&mut self, w: &CaseWhen) -> String {
        let expr = w.expr.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let result = w.result.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let mut b = self.builder();
        b.keyword("WHEN");
        b.append(&expr);
        b.keyword("THEN");
        b.append(&result);
        b.join(" ")
    }

    pub(super) fn render_coalesce_expr(&mut self, c: &CoalesceExpr) -> String {
        format!("COALESCE({})", self.render_list(&c.args, ", "))
    }

    pub(super) fn render_null_test(&mut self, n: &NullTest) -> String {
        let arg = n.arg.as_deref().map(|a| self.render_node(a)).unwrap_or_default();
        let kw = match n.nulltesttype() {
            NullTestType::IsNotNull => "IS NOT NULL",
            _ => "IS NULL",
        };
        format!("{arg} {kw}")
    }

    pub(super) fn render_a_array_expr(&mut self, a: &AArrayExpr) -> String {
        format!("ARRAY[{}]", self.render_list(&a.elements, ", "))
    }

    pub(super) fn render_sub_link(&mut self, s: &SubLink) -> String {
        let sub = s.subselect.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        format!("({sub})")
    }

    pub(super) fn render_row_expr(&mut self, r: &RowExpr) -> String {
        format!("ROW({})", self.render_list(&r.args, ", "))
    }

    pub(super) fn render_named_arg_expr(&mut self, n: &NamedArgExpr) -> String {
        let arg = n.arg.as_deref().map(|a| self.render_node(a)).unwrap_or_default();
        format!("{} => {arg}", n.name)
    }
}

fn is_bool_expr(n: &Node) -> bool {
    matches!(&n.node, Some(NodeEnum::BoolExpr(_)))
}

fn is_or_under_and(n: &Node, outer_is_or: bool) -> bool {
    if outer_is_or {
        return false;
    }
    matches!(&n.node, Some(NodeEnum::BoolExpr(b)) if b.boolop() == BoolExprType::OrExpr)
}
