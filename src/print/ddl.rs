//! DDL rendering: `CREATE TABLE`, `ALTER TABLE`, `DROP`, constraints, type
//! names, and their supporting pieces.

use pg_query::protobuf::{
    a_const, AlterEnumStmt, AlterObjectSchemaStmt, AlterTableCmd, AlterTableStmt, AlterTableType,
    ColumnDef, CoercionContext, CommentStmt, CompositeTypeStmt, ConstrType, Constraint, CreateCastStmt,
    CreateEnumStmt, CreateExtensionStmt, CreateFunctionStmt, CreateOpClassItem, CreateOpClassStmt,
    CreateSchemaStmt, CreateStmt, CreateTableAsStmt, CreateTransformStmt, DefElem, DropBehavior,
    DropStmt, ExplainStmt, FunctionParameter, FunctionParameterMode, IntoClause, LockStmt, Node,
    NotifyStmt, ObjectType, ObjectWithArgs, OnCommitAction, RenameStmt, RoleSpec, RuleStmt,
    TruncateStmt, TypeName, ViewCheckOption, ViewStmt,
};
use pg_query::NodeEnum;

use crate::enums;
use crate::interval;

use super::Printer;

impl Printer<'_> {
    pub(super) fn render_create_stmt(&mut self, s: &CreateStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        b.keyword_if(
            "TEMP",
            s.relation
                .as_ref()
                .map(|r| r.relpersistence == "t")
                .unwrap_or(false),
        );
        b.keyword_if(
            "UNLOGGED",
            s.relation
                .as_ref()
                .map(|r| r.relpersistence == "u")
                .unwrap_or(false),
        );
        b.keyword("TABLE");
        b.keyword_if("IF NOT EXISTS", s.if_not_exists);
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, false);
            b.append(&rel_text);
        }
        let cols = self.render_list(&s.table_elts, ", ");
        b.append(&format!("({cols})"));
        if let Some(inherits) = s.inh_relations.first().map(|_| &s.inh_relations) {
            let parents = self.render_list(inherits, ", ");
            b.keyword("INHERITS");
            b.append(&format!("({parents})"));
        }
        b.join(" ")
    }

    pub(super) fn render_column_def(&mut self, c: &ColumnDef) -> String {
        let mut b = self.builder();
        b.identifier(&[c.colname.as_str()]);
        if let Some(tn) = &c.type_name {
            let ty = self.render_type_name(tn);
            b.append(&ty);
        }
        if let Some(raw_default) = &c.raw_default {
            let expr = self.render_node(raw_default);
            b.keyword("DEFAULT");
            b.append(&expr);
        }
        for constraint in &c.constraints {
            let text = self.render_node(constraint);
            b.append(&text);
        }
        b.join(" ")
    }

    pub(super) fn render_constraint(&mut self, c: &Constraint) -> String {
        let mut b = self.builder();
        if !c.conname.is_empty() {
            b.keyword("CONSTRAINT");
            b.identifier(&[c.conname.as_str()]);
        }

        let contype = c.contype();
        match contype {
            ConstrType::ConstrForeign => {
                if c.fk_attrs.len() > 1 {
                    b.keyword("FOREIGN KEY");
                    let cols = self.render_list(&c.fk_attrs, ", ");
                    b.append(&format!("({cols})"));
                }
                b.keyword("REFERENCES");
                if let Some(pk) = &c.pktable {
                    let pk_text = self.render_range_var(pk, false);
                    b.append(&pk_text);
                }
                if !c.pk_attrs.is_empty() {
                    let cols = self.render_list(&c.pk_attrs, ", ");
                    b.append(&format!("({cols})"));
                }
            }
            ConstrType::ConstrCheck => {
                b.keyword("CHECK");
                let expr = c
                    .raw_expr
                    .as_deref()
                    .map(|n| self.render_node(n))
                    .unwrap_or_default();
                b.append(&format!("({expr})"));
            }
            ConstrType::ConstrGenerated => {
                let when = if c.generated_when == "a" {
                    "ALWAYS"
                } else {
                    "BY DEFAULT"
                };
                b.keyword("GENERATED");
                b.keyword(when);
                b.keyword("AS");
                let expr = c
                    .raw_expr
                    .as_deref()
                    .map(|n| self.render_node(n))
                    .unwrap_or_default();
                b.append(&format!("({expr})"));
                b.keyword("STORED");
            }
            ConstrType::ConstrPrimary | ConstrType::ConstrUnique => {
                b.keyword(enums::constraint_type_keyword(contype));
                if !c.keys.is_empty() {
                    let cols = self.render_list(&c.keys, ", ");
                    b.append(&format!("({cols})"));
                }
            }
            ConstrType::ConstrExclusion => {
                b.keyword("EXCLUDE");
                if !c.access_method.is_empty() {
                    b.keyword("USING");
                    b.identifier(&[c.access_method.as_str()]);
                }
            }
            _ => {
                let kw = enums::constraint_type_keyword(contype);
                if kw.is_empty() {
                    self.record_error(format!("Constraint type {contype:?} not implemented"));
                } else {
                    b.keyword(kw);
                }
            }
        }

        b.keyword_if("NOT VALID", c.skip_validation);
        if !c.indexname.is_empty() {
            b.keyword("USING INDEX");
            b.identifier(&[c.indexname.as_str()]);
        }
        b.join(" ")
    }

    pub(super) fn render_type_name(&mut self, t: &TypeName) -> String {
        let names: Vec<String> = t
            .names
            .iter()
            .filter_map(|n| match &n.node {
                Some(NodeEnum::String(s)) => Some(s.sval.clone()),
                _ => None,
            })
            .collect();

        let last = names.last().cloned().unwrap_or_default();
        let is_pg_catalog = names.first().map(|n| n == "pg_catalog").unwrap_or(false);
        let mut mapped = if is_pg_catalog {
            enums::pg_catalog_type(&last).map(str::to_string)
        } else {
            None
        };
        let mut base_name = mapped.take().unwrap_or_else(|| {
            if is_pg_catalog {
                self.record_error(format!("unknown pg_catalog type: {last}"));
                last.clone()
            } else {
                names.join(".")
            }
        });

        if self.opt.upper_type {
            base_name = base_name.to_uppercase();
        }

        let mut b = self.builder();
        b.keyword_if("SETOF", t.setof);
        b.append(&base_name);

        if base_name == "interval" && !t.typmods.is_empty() {
            if let Some(NodeEnum::AConst(a)) = t.typmods[0].node.as_ref() {
                if let Some(a_const::Val::Ival(i)) = &a.val {
                    let qualifier = interval::decode(i.ival);
                    if !qualifier.is_empty() {
                        b.append(qualifier);
                    }
                }
            }
            if t.typmods.len() > 1 {
                let precision = self.render_node(&t.typmods[1]);
                b.add_to_last(&format!("({precision})"));
            }
        } else if !t.typmods.is_empty() {
            let mods = self.render_list(&t.typmods, ", ");
            b.add_to_last(&format!("({mods})"));
        }

        let mut text = b.join(" ");
        for bound in &t.array_bounds {
            let n = match &bound.node {
                Some(NodeEnum::Integer(i)) => i.ival,
                _ => 0,
            };
            if n > 0 {
                text.push_str(&format!("[{n}]"));
            } else {
                text.push_str("[]");
            }
        }
        text
    }

    pub(super) fn render_def_elem(&mut self, d: &DefElem) -> String {
        let arg_text = d.arg.as_deref().map(|n| self.render_node(n));
        match d.defname.as_str() {
            "as" => {
                let text = arg_text.unwrap_or_default();
                if text.contains('\'') {
                    format!("AS $$ {text} $$")
                } else {
                    format!("AS '{text}'")
                }
            }
            "language" => format!("LANGUAGE {}", arg_text.unwrap_or_default()),
            "format" => format!("FORMAT {}", arg_text.unwrap_or_default()),
            "fillfactor" => format!("(FILLFACTOR={})", arg_text.unwrap_or_default()),
            "analyze" | "verbose" | "costs" | "settings" | "buffers" | "wal" | "timing"
            | "summary" | "user_catalog_table" | "strict" => d.defname.to_uppercase(),
            other => match arg_text {
                Some(arg) => format!("{}={arg}", other),
                None => other.to_string(),
            },
        }
    }

    pub(super) fn render_object_with_args(&mut self, o: &ObjectWithArgs) -> String {
        let name = self.render_list(&o.objname, ".");
        if o.args_unspecified {
            return name;
        }
        let args = self.render_list(&o.objargs, ", ");
        format!("{name}({args})")
    }

    pub(super) fn render_alter_table_stmt(&mut self, s: &AlterTableStmt) -> String {
        let mut b = self.builder();
        b.keyword("ALTER TABLE");
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, true);
            b.append(&rel_text);
        }
        let cmds = self.render_list(&s.cmds, ", ");
        b.append(&cmds);
        b.join(" ")
    }

    pub(super) fn render_alter_table_cmd(&mut self, c: &AlterTableCmd) -> String {
        let (command, option) = enums::alter_table_subtype_keyword(c.subtype());
        if command.is_empty() {
            self.record_error(format!("AlterTableType {:?} not implemented", c.subtype()));
            return String::new();
        }
        let mut b = self.builder();
        b.keyword(command);
        b.keyword_if(option, !option.is_empty());
        if !c.name.is_empty() {
            b.identifier(&[c.name.as_str()]);
        }
        if let Some(def) = &c.def {
            let text = self.render_node(def);
            b.append(&text);
        }
        b.keyword_if("CASCADE", c.behavior() == DropBehavior::DropCascade);
        b.join(" ")
    }

    pub(super) fn render_drop_stmt(&mut self, s: &DropStmt) -> String {
        let kind = s.remove_type();
        let mut b = self.builder();
        b.keyword("DROP");
        b.keyword(enums::object_type_keyword(kind));
        b.keyword_if("CONCURRENTLY", s.concurrent);
        b.keyword_if("IF EXISTS", s.missing_ok);

        let body = match kind {
            ObjectType::ObjectCast => {
                if s.objects.len() == 1 {
                    let inner = self.render_node(&s.objects[0]);
                    format!("({inner})")
                } else {
                    String::new()
                }
            }
            ObjectType::ObjectTrigger | ObjectType::ObjectRule | ObjectType::ObjectPolicy => {
                self.render_name_on_table(&s.objects)
            }
            ObjectType::ObjectOpclass | ObjectType::ObjectOpfamily => {
                self.render_name_using_am(&s.objects)
            }
            ObjectType::ObjectTransform => self.render_transform_for(&s.objects),
            _ => self.render_list(&s.objects, ", "),
        };
        b.append(&body);
        b.keyword_if("CASCADE", s.behavior() == DropBehavior::DropCascade);
        b.join(" ")
    }

    /// `DROP TRIGGER name ON table` — the trigger/rule/policy name is the
    /// trailing element of a dotted `List`; everything before it qualifies
    /// the table.
    fn render_name_on_table(&mut self, objects: &[Node]) -> String {
        let Some(first) = objects.first() else {
            return String::new();
        };
        let Some(NodeEnum::List(list)) = &first.node else {
            return self.render_node(first);
        };
        let Some((name_node, table_nodes)) = list.items.split_last() else {
            return String::new();
        };
        let name = self.render_node(name_node);
        let table = self.render_list(table_nodes, ".");
        format!("{name} ON {table}")
    }

    /// `DROP OPERATOR CLASS/FAMILY name USING access_method` — the access
    /// method is the trailing element of a dotted `List`, the rest is the
    /// opclass/opfamily name.
    fn render_name_using_am(&mut self, objects: &[Node]) -> String {
        let Some(first) = objects.first() else {
            return String::new();
        };
        let Some(NodeEnum::List(list)) = &first.node else {
            return self.render_node(first);
        };
        let Some((am_node, name_nodes)) = list.items.split_last() else {
            return String::new();
        };
        let am = self.render_node(am_node);
        let name = self.render_list(name_nodes, ".");
        format!("{name} USING {am}")
    }

    /// `DROP TRANSFORM FOR type LANGUAGE lang` — `objects[0]` is the
    /// `TypeName`, `objects[1]` is the language name.
    fn render_transform_for(&mut self, objects: &[Node]) -> String {
        let ty = objects.first().map(|n| self.render_node(n)).unwrap_or_default();
        let lang = objects.get(1).map(|n| self.render_node(n)).unwrap_or_default();
        format!("FOR {ty} LANGUAGE {lang}")
    }

    pub(super) fn render_rename_stmt(&mut self, s: &RenameStmt) -> String {
        let mut b = self.builder();
        b.keyword("ALTER");
        b.keyword(enums::object_type_keyword(s.rename_type()));
        match s.rename_type() {
            ObjectType::ObjectTable => {
                if let Some(rel) = &s.relation {
                    let rel_text = self.render_range_var(rel, false);
                    b.append(&rel_text);
                }
            }
            ObjectType::ObjectColumn => {
                if let Some(rel) = &s.relation {
                    let rel_text = self.render_range_var(rel, false);
                    b.append(&rel_text);
                }
                b.keyword("RENAME COLUMN");
                b.identifier(&[s.subname.as_str()]);
            }
            _ => {}
        }
        b.keyword("RENAME TO");
        b.identifier(&[s.newname.as_str()]);
        b.join(" ")
    }

    pub(super) fn render_create_schema_stmt(&mut self, s: &CreateSchemaStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE SCHEMA");
        b.keyword_if("IF NOT EXISTS", s.if_not_exists);
        if !s.schemaname.is_empty() {
            b.identifier(&[s.schemaname.as_str()]);
        }
        b.join(" ")
    }

    pub(super) fn render_comment_stmt(&mut self, s: &CommentStmt) -> String {
        let mut b = self.builder();
        b.keyword("COMMENT ON");
        b.keyword(enums::object_type_keyword(s.objtype()));
        if let Some(obj) = &s.object {
            let text = self.render_node(obj);
            b.append(&text);
        }
        b.keyword("IS");
        match &s.comment {
            c if !c.is_empty() => b.append(&format!("'{}'", c.replace('\'', "''"))),
            _ => b.keyword("NULL"),
        };
        b.join(" ")
    }

    pub(super) fn render_truncate_stmt(&mut self, s: &TruncateStmt) -> String {
        let mut b = self.builder();
        b.keyword("TRUNCATE");
        let tables: Vec<String> = s
            .relations
            .iter()
            .filter_map(|n| match &n.node {
                Some(NodeEnum::RangeVar(rv)) => Some(self.render_range_var(rv, false)),
                _ => None,
            })
            .collect();
        b.append(&tables.join(", "));
        b.keyword_if("CASCADE", s.behavior() == DropBehavior::DropCascade);
        b.join(" ")
    }

    pub(super) fn render_create_function_stmt(&mut self, s: &CreateFunctionStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        b.keyword_if("OR REPLACE", s.replace);
        b.keyword_if_else("PROCEDURE", "FUNCTION", s.is_procedure);
        let name = self.render_list(&s.funcname, ".");
        let params = self.render_list(&s.parameters, ", ");
        b.append(&format!("{name}({params})"));
        if let Some(ret) = &s.return_type {
            b.keyword("RETURNS");
            let ty = self.render_type_name(ret);
            b.append(&ty);
        }
        for opt in &s.options {
            let text = self.render_node(opt);
            b.append(&text);
        }
        b.join(" ")
    }

    pub(super) fn render_function_parameter(&mut self, p: &FunctionParameter) -> String {
        let mut b = self.builder();
        match p.mode() {
            FunctionParameterMode::FuncParamOut => b.keyword("OUT"),
            FunctionParameterMode::FuncParamInout => b.keyword("INOUT"),
            FunctionParameterMode::FuncParamVariadic => b.keyword("VARIADIC"),
            _ => &mut b,
        };
        if !p.name.is_empty() {
            b.identifier(&[p.name.as_str()]);
        }
        if let Some(ty) = &p.arg_type {
            let text = self.render_type_name(ty);
            b.append(&text);
        }
        if let Some(def) = &p.defexpr {
            let text = self.render_node(def);
            b.add_to_last(&format!(" = {text}"));
        }
        b.join(" ")
    }

    pub(super) fn render_create_enum_stmt(&mut self, s: &CreateEnumStmt) -> String {
        let name = self.render_list(&s.type_name, ".");
        let vals = self.render_list(&s.vals, ", ");
        format!("CREATE TYPE {name} AS ENUM ({vals})")
    }

    pub(super) fn render_composite_type_stmt(&mut self, s: &CompositeTypeStmt) -> String {
        let typevar = s
            .typevar
            .as_ref()
            .map(|rv| self.render_range_var(rv, false))
            .unwrap_or_default();
        let cols = self.render_list(&s.coldeflist, ", ");
        format!("CREATE TYPE {typevar} AS ({cols})")
    }

    pub(super) fn render_create_extension_stmt(&mut self, s: &CreateExtensionStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE EXTENSION");
        b.keyword_if("IF NOT EXISTS", s.if_not_exists);
        b.identifier(&[s.extname.as_str()]);
        if !s.options.is_empty() {
            b.keyword("WITH");
            let opts = self.render_list(&s.options, " ");
            b.append(&opts);
        }
        b.join(" ")
    }

    pub(super) fn render_create_table_as_stmt(&mut self, s: &CreateTableAsStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        let into = s.into.as_ref();
        b.keyword_if(
            "TEMP",
            into.and_then(|i| i.rel.as_ref()).map(|r| r.relpersistence == "t").unwrap_or(false),
        );
        b.keyword_if_else(
            "MATERIALIZED VIEW",
            "TABLE",
            s.relkind() == ObjectType::ObjectMatview,
        );
        b.keyword_if("IF NOT EXISTS", s.if_not_exists);
        if let Some(into) = into {
            if let Some(rel) = &into.rel {
                let rel_text = self.render_range_var(rel, false);
                b.append(&rel_text);
            }
            if !into.col_names.is_empty() {
                let cols = self.render_list(&into.col_names, ", ");
                b.append(&format!("({cols})"));
            }
            if !into.access_method.is_empty() {
                b.keyword("USING");
                b.identifier(&[into.access_method.as_str()]);
            }
            if !into.options.is_empty() {
                b.keyword("WITH");
                let opts = self.render_list(&into.options, ", ");
                b.append(&format!("({opts})"));
            }
            match into.on_commit() {
                OnCommitAction::OncommitDeleteRows => b.keyword("ON COMMIT DELETE ROWS"),
                OnCommitAction::OncommitDrop => b.keyword("ON COMMIT DROP"),
                OnCommitAction::OncommitPreserveRows => b.keyword("ON COMMIT PRESERVE ROWS"),
                _ => &mut b,
            };
            if !into.table_space_name.is_empty() {
                b.keyword("TABLESPACE");
                b.identifier(&[into.table_space_name.as_str()]);
            }
        }
        b.keyword("AS");
        if let Some(query) = &s.query {
            let text = self.render_node(query);
            b.append(&text);
        }
        b.keyword_if("WITH NO DATA", into.map(|i| i.skip_data).unwrap_or(false));
        b.join(" ")
    }

    pub(super) fn render_into_clause(&mut self, i: &IntoClause) -> String {
        i.rel.as_ref().map(|rv| self.render_range_var(rv, false)).unwrap_or_default()
    }

    pub(super) fn render_alter_enum_stmt(&mut self, s: &AlterEnumStmt) -> String {
        let mut b = self.builder();
        b.keyword("ALTER TYPE");
        let name = self.render_list(&s.type_name, ".");
        b.append(&name);
        if !s.old_val.is_empty() {
            b.keyword("RENAME VALUE");
            b.append(&format!("'{}'", s.old_val.replace('\'', "''")));
            b.keyword("TO");
            b.append(&format!("'{}'", s.new_val.replace('\'', "''")));
        } else {
            b.keyword("ADD VALUE");
            b.keyword_if("IF NOT EXISTS", s.skip_if_new_val_exists);
            b.append(&format!("'{}'", s.new_val.replace('\'', "''")));
            if !s.new_val_neighbor.is_empty() {
                b.keyword_if_else("AFTER", "BEFORE", s.new_val_is_after);
                b.append(&format!("'{}'", s.new_val_neighbor.replace('\'', "''")));
            }
        }
        b.join(" ")
    }

    pub(super) fn render_alter_object_schema_stmt(&mut self, s: &AlterObjectSchemaStmt) -> String {
        let mut b = self.builder();
        b.keyword("ALTER");
        b.keyword(enums::object_type_keyword(s.object_type()));
        b.keyword_if("IF EXISTS", s.missing_ok);
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, false);
            b.append(&rel_text);
        } else if let Some(obj) = &s.object {
            let text = self.render_node(obj);
            b.append(&text);
        }
        b.keyword("SET SCHEMA");
        b.identifier(&[s.newschema.as_str()]);
        b.join(" ")
    }

    pub(super) fn render_create_cast_stmt(&mut self, s: &CreateCastStmt) -> String {
        let source = s.sourcetype.as_ref().map(|t| self.render_type_name(t)).unwrap_or_default();
        let target = s.targettype.as_ref().map(|t| self.render_type_name(t)).unwrap_or_default();
        let mut b = self.builder();
        b.keyword("CREATE CAST");
        b.append(&format!("({source} AS {target})"));
        if s.inout {
            b.keyword("WITH INOUT");
        } else if let Some(func) = &s.func {
            b.keyword("WITH FUNCTION");
            let text = self.render_object_with_args(func);
            b.append(&text);
        } else {
            b.keyword("WITHOUT FUNCTION");
        }
        match s.context() {
            CoercionContext::CoercionAssignment => b.keyword("AS ASSIGNMENT"),
            CoercionContext::CoercionImplicit => b.keyword("AS IMPLICIT"),
            _ => &mut b,
        };
        b.join(" ")
    }

    pub(super) fn render_create_op_class_stmt(&mut self, s: &CreateOpClassStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE OPERATOR CLASS");
        let name = self.render_list(&s.opclassname, ".");
        b.append(&name);
        b.keyword_if("DEFAULT", s.is_default);
        b.keyword("FOR TYPE");
        if let Some(ty) = &s.datatype {
            let text = self.render_type_name(ty);
            b.append(&text);
        }
        b.keyword("USING");
        b.identifier(&[s.amname.as_str()]);
        b.keyword("AS");
        let items = self.render_list(&s.items, ", ");
        b.append(&items);
        b.join(" ")
    }

    pub(super) fn render_create_op_class_item(&mut self, i: &CreateOpClassItem) -> String {
        let name = i.name.as_ref().map(|o| self.render_object_with_args(o)).unwrap_or_default();
        match i.itemtype {
            1 => format!("OPERATOR {} {name}", i.number),
            2 => format!("FUNCTION {} {name}", i.number),
            _ => {
                self.record_error(format!("CreateOpClassItem itemtype {} not implemented", i.itemtype));
                String::new()
            }
        }
    }

    pub(super) fn render_create_transform_stmt(&mut self, s: &CreateTransformStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        b.keyword_if("OR REPLACE", s.replace);
        b.keyword("TRANSFORM FOR");
        if let Some(ty) = &s.type_name {
            let text = self.render_type_name(ty);
            b.append(&text);
        }
        b.keyword("LANGUAGE");
        b.identifier(&[s.lang.as_str()]);
        let fromsql = s.fromsql.as_ref().map(|o| self.render_object_with_args(o)).unwrap_or_default();
        let tosql = s.tosql.as_ref().map(|o| self.render_object_with_args(o)).unwrap_or_default();
        b.append(&format!("(FROM SQL WITH FUNCTION {fromsql}, TO SQL WITH FUNCTION {tosql})"));
        b.join(" ")
    }

    pub(super) fn render_rule_stmt(&mut self, s: &RuleStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        b.keyword_if("OR REPLACE", s.replace);
        b.keyword("RULE");
        b.identifier(&[s.rulename.as_str()]);
        b.keyword("AS ON");
        b.keyword(enums::cmd_type(s.event()));
        b.keyword("TO");
        if let Some(rel) = &s.relation {
            let rel_text = self.render_range_var(rel, false);
            b.append(&rel_text);
        }
        if let Some(wh) = &s.where_clause {
            b.keyword("WHERE");
            let text = self.render_node(wh);
            b.append(&text);
        }
        b.keyword_if_else("DO INSTEAD", "DO ALSO", s.instead);
        if s.actions.is_empty() {
            b.keyword("NOTHING");
        } else {
            let actions = self.render_list(&s.actions, "; ");
            b.append(&actions);
        }
        b.join(" ")
    }

    pub(super) fn render_view_stmt(&mut self, s: &ViewStmt) -> String {
        let mut b = self.builder();
        b.keyword("CREATE");
        b.keyword_if("OR REPLACE", s.replace);
        b.keyword("VIEW");
        if let Some(view) = &s.view {
            let view_text = self.render_range_var(view, false);
            b.append(&view_text);
        }
        if !s.aliases.is_empty() {
            let cols = self.render_list(&s.aliases, ", ");
            b.add_to_last(&format!("({cols})"));
        }
        b.keyword("AS");
        if let Some(query) = &s.query {
            let text = self.render_node(query);
            b.append(&text);
        }
        match s.with_check_option() {
            ViewCheckOption::LocalCheckOption => b.keyword("WITH LOCAL CHECK OPTION"),
            ViewCheckOption::CascadedCheckOption => b.keyword("WITH CASCADED CHECK OPTION"),
            _ => &mut b,
        };
        b.join(" ")
    }

    pub(super) fn render_explain_stmt(&mut self, s: &ExplainStmt) -> String {
        let mut b = self.builder();
        b.keyword("EXPLAIN");
        if !s.options.is_empty() {
            let opts = self.render_list(&s.options, ", ");
            b.append(&format!("({opts})"));
        }
        if let Some(query) = &s.query {
            let text = self.render_node(query);
            b.append(&text);
        }
        b.join(" ")
    }

    pub(super) fn render_notify_stmt(&mut self, s: &NotifyStmt) -> String {
        let mut b = self.builder();
        b.keyword("NOTIFY");
        b.identifier(&[s.conditionname.as_str()]);
        if !s.payload.is_empty() {
            b.add_to_last(",");
            b.append(&format!("'{}'", s.payload.replace('\'', "''")));
        }
        b.join(" ")
    }

    pub(super) fn render_lock_stmt(&mut self, s: &LockStmt) -> String {
        let mut b = self.builder();
        b.keyword("LOCK");
        let tables: Vec<String> = s
            .relations
            .iter()
            .filter_map(|n| match &n.node {
                Some(NodeEnum::RangeVar(rv)) => Some(self.render_range_var(rv, false)),
                _ => None,
            })
            .collect();
        b.append(&tables.join(", "));
        let kw = enums::lock_mode(s.mode);
        if !kw.is_empty() {
            b.keyword("IN");
            b.keyword(kw);
            b.keyword("MODE");
        }
        b.keyword_if("NOWAIT", s.nowait);
        b.join(" ")
    }

    pub(super) fn render_role_spec(&mut self, r: &RoleSpec) -> String {
        if r.rolename.is_empty() {
            String::new()
        } else {
            r.rolename.clone()
        }
    }
}
