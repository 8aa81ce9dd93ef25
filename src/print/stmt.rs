//! Statement-root rendering: `SELECT`/`INSERT`/`UPDATE`/`DELETE` and their
//! shared clauses (`WITH`, `ORDER BY`, locking).

use pg_query::protobuf::{
    CommonTableExpr, CteMaterialize, DeleteStmt, InsertStmt, Node, OnConflictAction, RawStmt,
    SelectStmt, SetOperation, SortBy, SortByDir, SortByNulls, UpdateStmt, WithClause,
};
use pg_query::NodeEnum;

use crate::options::FormatOptions;

use super::Printer;

/// `padLines`-equivalent: prepend `padding` to every non-terminal line,
/// trimming any trailing spaces the padding introduces on blank lines.
fn pad_lines(s: &str, padding: &str) -> String {
    s.split('\n')
        .map(|line| format!("{padding}{line}").trim_end_matches(' ').to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Printer<'_> {
    pub(super) fn render_raw_stmt(&mut self, s: &RawStmt) -> String {
        let mut text = s
            .stmt
            .as_deref()
            .map(|n| self.render_node(n))
            .unwrap_or_default();
        if text.ends_with('\n') {
            text.pop();
        }
        if !self.opt.unterminated {
            text.push(';');
        }
        if self.opt.pretty {
            text.push('\n');
        }
        text
    }

    /// Comma-joined sub-clause. In pretty mode the whole thing is wrapped in
    /// leading/trailing newlines and each item is indented one level, with
    /// the separator itself carrying a line break (mirrors the `FROM`/
    /// `VALUES` clause shape of the reference printer).
    fn render_pretty_csv(&mut self, items: &[Node]) -> String {
        if items.is_empty() {
            return String::new();
        }
        if self.opt.pretty {
            let joined = self.render_list(items, ",\n");
            let padded = pad_lines(&joined, self.opt.padding);
            format!("\n{padded}\n")
        } else {
            self.render_list(items, ", ")
        }
    }

    /// Same shape as [`Self::render_pretty_csv`] but for strings that are
    /// already rendered (e.g. each `VALUES` row, parenthesized up front).
    fn render_pretty_csv_strings(&mut self, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        if self.opt.pretty {
            let joined = items.join(",\n");
            let padded = pad_lines(&joined, self.opt.padding);
            format!("\n{padded}\n")
        } else {
            items.join(", ")
        }
    }

    pub(super) fn render_select_stmt(&mut self, s: &SelectStmt) -> String {
        let text = self.render_select_stmt_inner(s);
        if self.opt.pretty && text.len() <= self.opt.simple_len {
            let compact_opt = FormatOptions {
                pretty: false,
                ..self.opt
            };
            let saved = self.opt;
            self.opt = compact_opt;
            let collapsed = self.render_select_stmt_inner(s);
            self.opt = saved;
            return collapsed;
        }
        text
    }

    fn render_select_stmt_inner(&mut self, s: &SelectStmt) -> String {
        if s.op() != SetOperation::SetopNone {
            return self.render_set_op(s);
        }

        let mut b = self.builder();
        if let Some(with) = &s.with_clause {
            let text = self.render_with_clause(with);
            b.append(&text);
            b.line_feed();
        }

        b.keyword("SELECT");
        if !s.distinct_clause.is_empty() {
            b.keyword("DISTINCT");
            let has_on = s.distinct_clause.iter().any(|n| n.node.is_some());
            if has_on {
                let cols = self.render_list(&s.distinct_clause, ", ");
                if !cols.is_empty() {
                    b.keyword("ON");
                    b.append(&format!("({cols})"));
                }
            }
        }

        if s.target_list.is_empty() {
            b.append("*");
        } else if self.opt.one_result_column_per_line && self.opt.pretty {
            let mut cols = self.builder();
            for item in &s.target_list {
                let text = self.render_node(item);
                cols.append_padded(&format!("{text},"));
                cols.line_feed();
            }
            let mut joined = cols.join("");
            if joined.ends_with(",\n") {
                joined.truncate(joined.len() - 2);
            } else if joined.ends_with(',') {
                joined.pop();
            }
            b.line_feed();
            b.append(&joined);
        } else {
            let cols = self.render_list(&s.target_list, ", ");
            b.append(&cols);
        }

        if let Some(into) = &s.into_clause {
            if let Some(rel) = &into.rel {
                b.keyword("INTO");
                let rel_text = self.render_range_var(rel, false);
                b.append(&rel_text);
            }
        }

        if !s.from_clause.is_empty() {
            b.line_feed();
            b.keyword("FROM");
            let from = self.render_pretty_csv(&s.from_clause);
            b.append(&from);
        }

        if !s.values_lists.is_empty() {
            b.keyword("VALUES");
            let rendered_rows: Vec<String> = s
                .values_lists
                .iter()
                .map(|row| match &row.node {
                    Some(NodeEnum::List(l)) => format!("({})", self.render_list(&l.items, ", ")),
                    _ => format!("({})", self.render_node(row)),
                })
                .collect();
            let rows = self.render_pretty_csv_strings(&rendered_rows);
            b.append(&rows);
        }

        if let Some(wh) = &s.where_clause {
            b.line_feed();
            b.keyword("WHERE");
            let text = self.render_node(wh);
            b.append(&text);
        }

        if !s.group_clause.is_empty() {
            b.line_feed();
            b.keyword("GROUP BY");
            b.keyword_if("DISTINCT", s.group_distinct);
            let cols = self.render_list(&s.group_clause, ", ");
            b.append(&cols);
        }

        if let Some(having) = &s.having_clause {
            b.line_feed();
            b.keyword("HAVING");
            let text = self.render_node(having);
            b.append(&text);
        }

        if !s.window_clause.is_empty() {
            b.keyword("WINDOW");
            let windows = self.render_list(&s.window_clause, ", ");
            b.append(&windows);
        }

        if !s.sort_clause.is_empty() {
            b.line_feed();
            b.keyword("ORDER BY");
            let cols = self.render_list(&s.sort_clause, ", ");
            b.append(&cols);
        }

        if let Some(limit) = &s.limit_count {
            b.keyword("LIMIT");
            let text = self.render_node(limit);
            b.append(&text);
        }
        if let Some(offset) = &s.limit_offset {
            b.keyword("OFFSET");
            let text = self.render_node(offset);
            b.append(&text);
        }

        if !s.locking_clause.is_empty() {
            let locking = self.render_list(&s.locking_clause, " ");
            b.append(&locking);
        }

        b.join(" ")
    }

    fn render_set_op(&mut self, s: &SelectStmt) -> String {
        let larg = s
            .larg
            .as_deref()
            .map(|l| self.render_select_stmt_inner(l))
            .unwrap_or_default();
        let rarg = s
            .rarg
            .as_deref()
            .map(|r| self.render_select_stmt_inner(r))
            .unwrap_or_default();
        let kw = crate::enums::set_operation_keyword(s.op());
        if kw.is_empty() {
            self.record_error(format!("SetOperation {:?} not implemented", s.op()));
            return String::new();
        }
        let mut b = self.builder();
        b.append(&larg);
        b.line_feed();
        b.keyword(kw);
        b.keyword_if("ALL", s.all);
        b.append(&rarg);
        b.join(" ")
    }

    pub(super) fn render_insert_stmt(&mut self, s: &InsertStmt) -> String {
        let mut b = self.builder();
        if let Some(with) = &s.with_clause {
            let text = self.render_with_clause(with);
            b.append(&text);
            b.line_feed();
        }
        b.keyword("INSERT INTO");
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, false);
            b.append(&rel_text);
        }
        if !s.cols.is_empty() {
            let cols = self.render_list(&s.cols, ", ");
            b.append(&format!("({cols})"));
        }
        if let Some(select) = &s.select_stmt {
            let text = self.render_node(select);
            b.append(&text);
        } else {
            b.keyword("DEFAULT VALUES");
        }
        if let Some(onconflict) = &s.on_conflict_clause {
            b.keyword("ON CONFLICT");
            let action = if onconflict.action() == OnConflictAction::OnconflictNothing {
                "DO NOTHING"
            } else {
                "DO UPDATE"
            };
            b.keyword(action);
            if onconflict.action() == OnConflictAction::OnconflictUpdate && !onconflict.target_list.is_empty() {
                b.keyword("SET");
                let set_list = self.render_list(&onconflict.target_list, ", ");
                b.append(&set_list);
            }
        }
        if !s.returning_list.is_empty() {
            b.keyword("RETURNING");
            let returning = self.render_list(&s.returning_list, ", ");
            b.append(&returning);
        }
        b.join(" ")
    }

    pub(super) fn render_update_stmt(&mut self, s: &UpdateStmt) -> String {
        let mut b = self.builder();
        if let Some(with) = &s.with_clause {
            let text = self.render_with_clause(with);
            b.append(&text);
            b.line_feed();
        }
        b.keyword("UPDATE");
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, true);
            b.append(&rel_text);
        }
        b.keyword("SET");
        let set_list = self.render_list(&s.target_list, ", ");
        b.append(&set_list);

        if !s.from_clause.is_empty() {
            b.keyword("FROM");
            let from = self.render_list(&s.from_clause, ", ");
            b.append(&from);
        }
        if let Some(wh) = &s.where_clause {
            b.keyword("WHERE");
            let text = self.render_node(wh);
            b.append(&text);
        }
        if !s.returning_list.is_empty() {
            b.keyword("RETURNING");
            let returning = self.render_list(&s.returning_list, ", ");
            b.append(&returning);
        }
        b.join(" ")
    }

    pub(super) fn render_delete_stmt(&mut self, s: &DeleteStmt) -> String {
        let mut b = self.builder();
        if let Some(with) = &s.with_clause {
            let text = self.render_with_clause(with);
            b.append(&text);
            b.line_feed();
        }
        b.keyword("DELETE FROM");
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, true);
            b.append(&rel_text);
        }
        if !s.using_clause.is_empty() {
            b.keyword("USING");
            let using = self.render_list(&s.using_clause, ", ");
            b.append(&using);
        }
        if let Some(wh) = &s.where_clause {
            b.keyword("WHERE");
            let text = self.render_node(wh);
            b.append(&text);
        }
        if !s.returning_list.is_empty() {
            b.keyword("RETURNING");
            let returning = self.render_list(&s.returning_list, ", ");
            b.append(&returning);
        }
        b.join(" ")
    }

    pub(super) fn render_with_clause(&mut self, w: &WithClause) -> String {
        let mut b = self.builder();
        b.keyword("WITH");
        b.keyword_if("RECURSIVE", w.recursive);
        let ctes = self.render_list(&w.ctes, ", ");
        b.append(&ctes);
        b.join(" ")
    }

    pub(super) fn render_common_table_expr(&mut self, c: &CommonTableExpr) -> String {
        let mut b = self.builder();
        b.identifier(&[c.ctename.as_str()]);
        if !c.aliascolnames.is_empty() {
            let cols = self.render_list(&c.aliascolnames, ", ");
            b.append(&format!("({cols})"));
        }
        b.keyword("AS");
        if c.ctematerialized() == CteMaterialize::CtematerializeAlways {
            b.keyword("MATERIALIZED");
        } else if c.ctematerialized() == CteMaterialize::CtematerializeNever {
            b.keyword("NOT MATERIALIZED");
        }
        let query = c
            .ctequery
            .as_deref()
            .map(|n| self.render_node(n))
            .unwrap_or_default();
        b.append(&format!("({query})"));
        b.join(" ")
    }

    pub(super) fn render_sort_by(&mut self, s: &SortBy) -> String {
        let expr = s.node.as_deref().map(|n| self.render_node(n)).unwrap_or_default();
        let mut b = self.builder();
        b.append(&expr);
        match s.sortby_dir() {
            SortByDir::SortbyAsc => b.keyword("ASC"),
            SortByDir::SortbyDesc => b.keyword("DESC"),
            SortByDir::SortbyUsing => {
                b.keyword("USING");
                let op = self.render_list(&s.use_op, " ");
                b.append(&op)
            }
            _ => &mut b,
        };
        match s.sortby_nulls() {
            SortByNulls::SortbyNullsFirst => b.keyword("NULLS FIRST"),
            SortByNulls::SortbyNullsLast => b.keyword("NULLS LAST"),
            _ => &mut b,
        };
        b.join(" ")
    }
}
