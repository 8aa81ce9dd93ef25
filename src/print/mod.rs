//! Dispatch & rendering core: one rendering rule per AST variant.
//!
//! [`Printer`] owns the active [`FormatOptions`], the per-call error list
//! (component I, error aggregation), and an optional debug trace. Dispatch
//! (`render_node`) is total over the tagged union: a variant this crate does
//! not model records `"<VariantName> not implemented"` to the error list and
//! renders as the empty string, per the failure semantics in the rendering
//! contract — never panics.

mod ddl;
mod expr;
mod stmt;

use pg_query::protobuf::Node;
use pg_query::NodeEnum;

use crate::builder::Builder;
use crate::options::FormatOptions;

/// Rendering state for a single top-level call. Not `Send`/`Sync` by
/// design — each entry point allocates a fresh one (see §5, concurrency
/// model: no shared mutable rendering state).
pub struct Printer<'a> {
    pub(crate) opt: FormatOptions<'a>,
    errors: Vec<String>,
    trace: Option<Vec<String>>,
    depth: usize,
}

impl<'a> Printer<'a> {
    pub fn new(opt: FormatOptions<'a>) -> Self {
        Printer {
            opt,
            errors: Vec::new(),
            trace: None,
            depth: 0,
        }
    }

    pub fn with_trace(opt: FormatOptions<'a>) -> Self {
        Printer {
            opt,
            errors: Vec::new(),
            trace: Some(Vec::new()),
            depth: 0,
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Composite error message: the per-call error list, `\n`-joined. Empty
    /// when nothing failed.
    pub fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.join("\n"))
        }
    }

    pub fn trace_text(&self) -> String {
        self.trace.as_ref().map(|t| t.join("\n")).unwrap_or_default()
    }

    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn builder(&self) -> Builder<'a> {
        Builder::new(self.opt)
    }

    /// Renders `node` by dispatching on its variant. The workhorse of
    /// component F; statement-root handling lives in `print::stmt`,
    /// DDL pieces in `print::ddl`, everything else (expressions, leaves,
    /// structural nodes) in `print::expr`.
    pub(crate) fn render_node(&mut self, node: &Node) -> String {
        let Some(inner) = &node.node else {
            return String::new();
        };

        self.depth += 1;
        let (variant, text) = self.dispatch(inner);
        if let Some(trace) = &mut self.trace {
            let indent = "  ".repeat(self.depth.saturating_sub(1));
            trace.push(format!("{indent}{variant}: {text}"));
        }
        self.depth -= 1;
        text
    }

    fn dispatch(&mut self, inner: &NodeEnum) -> (&'static str, String) {
        match inner {
            NodeEnum::RawStmt(s) => ("RawStmt", self.render_raw_stmt(s)),
            NodeEnum::SelectStmt(s) => ("SelectStmt", self.render_select_stmt(s)),
            NodeEnum::InsertStmt(s) => ("InsertStmt", self.render_insert_stmt(s)),
            NodeEnum::UpdateStmt(s) => ("UpdateStmt", self.render_update_stmt(s)),
            NodeEnum::DeleteStmt(s) => ("DeleteStmt", self.render_delete_stmt(s)),
            NodeEnum::TruncateStmt(s) => ("TruncateStmt", self.render_truncate_stmt(s)),
            NodeEnum::CreateStmt(s) => ("CreateStmt", self.render_create_stmt(s)),
            NodeEnum::AlterTableStmt(s) => ("AlterTableStmt", self.render_alter_table_stmt(s)),
            NodeEnum::DropStmt(s) => ("DropStmt", self.render_drop_stmt(s)),
            NodeEnum::RenameStmt(s) => ("RenameStmt", self.render_rename_stmt(s)),
            NodeEnum::CreateSchemaStmt(s) => ("CreateSchemaStmt", self.render_create_schema_stmt(s)),
            NodeEnum::CommentStmt(s) => ("CommentStmt", self.render_comment_stmt(s)),
            NodeEnum::AlterTableCmd(c) => ("AlterTableCmd", self.render_alter_table_cmd(c)),
            NodeEnum::RangeSubselect(e) => ("RangeSubselect", self.render_range_subselect(e)),
            NodeEnum::RangeFunction(e) => ("RangeFunction", self.render_range_function(e)),
            NodeEnum::LockingClause(e) => ("LockingClause", self.render_locking_clause(e)),
            NodeEnum::WindowDef(e) => ("WindowDef", self.render_window_def(e)),
            NodeEnum::LockStmt(s) => ("LockStmt", self.render_lock_stmt(s)),
            NodeEnum::RoleSpec(e) => ("RoleSpec", self.render_role_spec(e)),
            NodeEnum::ViewStmt(s) => ("ViewStmt", self.render_view_stmt(s)),
            NodeEnum::ExplainStmt(s) => ("ExplainStmt", self.render_explain_stmt(s)),
            NodeEnum::NotifyStmt(s) => ("NotifyStmt", self.render_notify_stmt(s)),
            NodeEnum::CreateCastStmt(s) => ("CreateCastStmt", self.render_create_cast_stmt(s)),
            NodeEnum::CreateOpClassStmt(s) => ("CreateOpClassStmt", self.render_create_op_class_stmt(s)),
            NodeEnum::CreateOpClassItem(e) => ("CreateOpClassItem", self.render_create_op_class_item(e)),
            NodeEnum::CreateTransformStmt(s) => {
                ("CreateTransformStmt", self.render_create_transform_stmt(s))
            }
            NodeEnum::RuleStmt(s) => ("RuleStmt", self.render_rule_stmt(s)),
            NodeEnum::CreateFunctionStmt(s) => ("CreateFunctionStmt", self.render_create_function_stmt(s)),
            NodeEnum::FunctionParameter(e) => ("FunctionParameter", self.render_function_parameter(e)),
            NodeEnum::CreateEnumStmt(s) => ("CreateEnumStmt", self.render_create_enum_stmt(s)),
            NodeEnum::CompositeTypeStmt(s) => ("CompositeTypeStmt", self.render_composite_type_stmt(s)),
            NodeEnum::CreateExtensionStmt(s) => ("CreateExtensionStmt", self.render_create_extension_stmt(s)),
            NodeEnum::CreateTableAsStmt(s) => ("CreateTableAsStmt", self.render_create_table_as_stmt(s)),
            NodeEnum::IntoClause(e) => ("IntoClause", self.render_into_clause(e)),
            NodeEnum::AlterEnumStmt(s) => ("AlterEnumStmt", self.render_alter_enum_stmt(s)),
            NodeEnum::AlterObjectSchemaStmt(s) => {
                ("AlterObjectSchemaStmt", self.render_alter_object_schema_stmt(s))
            }
            NodeEnum::MultiAssignRef(e) => ("MultiAssignRef", self.render_multi_assign_ref(e)),
            NodeEnum::SqlvalueFunction(e) => ("SQLValueFunction", self.render_sql_value_function(e)),
            NodeEnum::CurrentOfExpr(e) => ("CurrentOfExpr", self.render_current_of_expr(e)),
            NodeEnum::AExpr(e) => ("A_Expr", self.render_a_expr(e)),
            NodeEnum::BoolExpr(e) => ("BoolExpr", self.render_bool_expr(e)),
            NodeEnum::JoinExpr(e) => ("JoinExpr", self.render_join_expr(e)),
            NodeEnum::ColumnRef(e) => ("ColumnRef", self.render_column_ref(e)),
            NodeEnum::ResTarget(e) => ("ResTarget", self.render_res_target(e)),
            NodeEnum::RangeVar(e) => ("RangeVar", self.render_range_var(e, true)),
            NodeEnum::Alias(e) => ("Alias", self.render_alias(e)),
            NodeEnum::ParamRef(e) => ("ParamRef", self.render_param_ref(e)),
            NodeEnum::TypeCast(e) => ("TypeCast", self.render_type_cast(e)),
            NodeEnum::TypeName(e) => ("TypeName", self.render_type_name(e)),
            NodeEnum::FuncCall(e) => ("FuncCall", self.render_func_call(e)),
            NodeEnum::CaseExpr(e) => ("CaseExpr", self.render_case_expr(e)),
            NodeEnum::CaseWhen(e) => ("CaseWhen", self.render_case_when(e)),
            NodeEnum::CoalesceExpr(e) => ("CoalesceExpr", self.render_coalesce_expr(e)),
            NodeEnum::NullTest(e) => ("NullTest", self.render_null_test(e)),
            NodeEnum::AArrayExpr(e) => ("A_ArrayExpr", self.render_a_array_expr(e)),
            NodeEnum::SubLink(e) => ("SubLink", self.render_sub_link(e)),
            NodeEnum::RowExpr(e) => ("RowExpr", self.render_row_expr(e)),
            NodeEnum::NamedArgExpr(e) => ("NamedArgExpr", self.render_named_arg_expr(e)),
            NodeEnum::SetToDefault(_) => ("SetToDefault", "DEFAULT".to_string()),
            NodeEnum::List(e) => ("List", self.render_list(&e.items, ", ")),
            NodeEnum::WithClause(e) => ("WithClause", self.render_with_clause(e)),
            NodeEnum::CommonTableExpr(e) => ("CommonTableExpr", self.render_common_table_expr(e)),
            NodeEnum::SortBy(e) => ("SortBy", self.render_sort_by(e)),
            NodeEnum::ColumnDef(e) => ("ColumnDef", self.render_column_def(e)),
            NodeEnum::Constraint(e) => ("Constraint", self.render_constraint(e)),
            NodeEnum::DefElem(e) => ("DefElem", self.render_def_elem(e)),
            NodeEnum::ObjectWithArgs(e) => ("ObjectWithArgs", self.render_object_with_args(e)),
            NodeEnum::String(e) => ("String", e.sval.clone()),
            NodeEnum::Integer(e) => ("Integer", e.ival.to_string()),
            NodeEnum::Float(e) => ("Float", e.fval.clone()),
            NodeEnum::Boolean(e) => ("Boolean", e.boolval.to_string()),
            NodeEnum::BitString(e) => ("BitString", format!("B'{}'", e.bsval.trim_start_matches('b'))),
            NodeEnum::AConst(e) => ("A_Const", self.render_a_const(e)),
            NodeEnum::AStar(_) => ("A_Star", "*".to_string()),
            other => {
                let name = variant_name(other);
                self.record_error(format!("{name} not implemented"));
                (name, String::new())
            }
        }
    }
}

/// Best-effort variant name for the "not implemented" error message. Mirrors
/// the protobuf message name (e.g. `NodeEnum::CreatePublicationStmt(_)` →
/// `"CreatePublicationStmt"`), derived from the `Debug` tag since `NodeEnum`
/// has no direct name accessor.
fn variant_name(n: &NodeEnum) -> &'static str {
    // `NodeEnum`'s Debug output is `VariantName(inner-debug...)`; take the
    // tag up to the first `(`. Leaked once per distinct variant name (a
    // bounded, small set), acceptable for an error-path helper.
    let debug = format!("{n:?}");
    let tag = debug.split('(').next().unwrap_or(&debug).to_string();
    Box::leak(tag.into_boxed_str())
}
