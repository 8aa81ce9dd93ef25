//! Static enum → keyword tables.
//!
//! Every function here is a frozen, total-ish lookup: an unrecognized input
//! yields `""`, letting the caller in `src/print` decide whether that is an
//! error (most callers treat an empty string paired with a recorded error).

use pg_query::protobuf::{
    AlterTableType, CmdType, ConstrType, LockClauseStrength, ObjectType, SetOperation,
    SqlValueFunctionOp,
};

/// `object_type` → keyword, e.g. `TABLE`, `MATERIALIZED VIEW`.
pub fn object_type_keyword(t: ObjectType) -> &'static str {
    use ObjectType::*;
    match t {
        ObjectTable => "TABLE",
        ObjectIndex => "INDEX",
        ObjectSequence => "SEQUENCE",
        ObjectView => "VIEW",
        ObjectMatview => "MATERIALIZED VIEW",
        ObjectType => "TYPE",
        ObjectSchema => "SCHEMA",
        ObjectFunction => "FUNCTION",
        ObjectProcedure => "PROCEDURE",
        ObjectRoutine => "ROUTINE",
        ObjectAggregate => "AGGREGATE",
        ObjectOperator => "OPERATOR",
        ObjectLanguage => "LANGUAGE",
        ObjectCast => "CAST",
        ObjectTrigger => "TRIGGER",
        ObjectEventTrigger => "EVENT TRIGGER",
        ObjectRule => "RULE",
        ObjectDatabase => "DATABASE",
        ObjectTablespace => "TABLESPACE",
        ObjectRole => "ROLE",
        ObjectExtension => "EXTENSION",
        ObjectFdw => "FOREIGN DATA WRAPPER",
        ObjectForeignServer => "SERVER",
        ObjectForeignTable => "FOREIGN TABLE",
        ObjectPolicy => "POLICY",
        ObjectPublication => "PUBLICATION",
        ObjectSubscription => "SUBSCRIPTION",
        ObjectColumn => "COLUMN",
        ObjectDomain => "DOMAIN",
        ObjectCollation => "COLLATION",
        ObjectConversion => "CONVERSION",
        ObjectDefault => "DEFAULT",
        ObjectOpclass => "OPERATOR CLASS",
        ObjectOpfamily => "OPERATOR FAMILY",
        ObjectStatisticExt => "STATISTICS",
        ObjectTsconfiguration => "TEXT SEARCH CONFIGURATION",
        ObjectTsdictionary => "TEXT SEARCH DICTIONARY",
        ObjectTsparser => "TEXT SEARCH PARSER",
        ObjectTstemplate => "TEXT SEARCH TEMPLATE",
        ObjectTransform => "TRANSFORM",
        ObjectUserMapping => "USER MAPPING",
        ObjectAccessMethod => "ACCESS METHOD",
        _ => "",
    }
}

/// `set_operation` → keyword.
pub fn set_operation_keyword(op: SetOperation) -> &'static str {
    match op {
        SetOperation::SetopUnion => "UNION",
        SetOperation::SetopIntersect => "INTERSECT",
        SetOperation::SetopExcept => "EXCEPT",
        _ => "",
    }
}

/// `constraint_type` → keyword. `FOREIGN` is handled by the caller (it emits
/// `FOREIGN KEY` only when there are ≥2 key columns; see
/// `src/print/ddl.rs::render_constraint`).
pub fn constraint_type_keyword(t: ConstrType) -> &'static str {
    use ConstrType::*;
    match t {
        ConstrNull => "NULL",
        ConstrNotnull => "NOT NULL",
        ConstrDefault => "DEFAULT",
        ConstrCheck => "CHECK",
        ConstrPrimary => "PRIMARY KEY",
        ConstrUnique => "UNIQUE",
        ConstrExclusion => "EXCLUDE",
        ConstrForeign => "FOREIGN KEY",
        ConstrIdentity => "IDENTITY",
        ConstrGenerated => "GENERATED",
        _ => "",
    }
}

/// `alter_table_subtype` → (command, option), e.g.
/// `AtSetNotNull → ("ALTER", "SET NOT NULL")`.
pub fn alter_table_subtype_keyword(t: AlterTableType) -> (&'static str, &'static str) {
    use AlterTableType::*;
    match t {
        AtAddColumn => ("ADD", "COLUMN"),
        AtDropColumn => ("DROP", "COLUMN"),
        AtColumnDefault => ("ALTER", "SET DEFAULT"),
        AtDropNotNull => ("ALTER", "DROP NOT NULL"),
        AtSetNotNull => ("ALTER", "SET NOT NULL"),
        AtSetStatistics => ("ALTER", "SET STATISTICS"),
        AtSetOptions => ("ALTER", "SET"),
        AtResetOptions => ("ALTER", "RESET"),
        AtSetStorage => ("ALTER", "SET STORAGE"),
        AtAddConstraint => ("ADD", ""),
        AtDropConstraint => ("DROP CONSTRAINT", ""),
        AtAlterColumnType => ("ALTER", "TYPE"),
        AtValidateConstraint => ("VALIDATE CONSTRAINT", ""),
        AtAttachPartition => ("ATTACH PARTITION", ""),
        AtDetachPartition => ("DETACH PARTITION", ""),
        AtDisableTrig => ("DISABLE TRIGGER", ""),
        AtEnableTrig => ("ENABLE TRIGGER", ""),
        AtDisableTrigAll => ("DISABLE TRIGGER", "ALL"),
        AtEnableTrigAll => ("ENABLE TRIGGER", "ALL"),
        AtDisableTrigUser => ("DISABLE TRIGGER", "USER"),
        AtEnableTrigUser => ("ENABLE TRIGGER", "USER"),
        AtSetLogged => ("SET", "LOGGED"),
        AtSetUnLogged => ("SET", "UNLOGGED"),
        AtOwnerTo => ("OWNER TO", ""),
        _ => ("", ""),
    }
}

/// `SqlValueFunction.op` → the literal keyword(s) it stands for, e.g.
/// `SvfopCurrentDate → "CURRENT_DATE"`.
pub fn sql_value_function_op(op: SqlValueFunctionOp) -> &'static str {
    use SqlValueFunctionOp::*;
    match op {
        SvfopCurrentDate => "CURRENT_DATE",
        SvfopCurrentTime | SvfopCurrentTimeN => "CURRENT_TIME",
        SvfopCurrentTimestamp | SvfopCurrentTimestampN => "CURRENT_TIMESTAMP",
        SvfopLocaltime | SvfopLocaltimeN => "LOCALTIME",
        SvfopLocaltimestamp | SvfopLocaltimestampN => "LOCALTIMESTAMP",
        SvfopCurrentRole => "CURRENT_ROLE",
        SvfopCurrentUser => "CURRENT_USER",
        SvfopUser => "USER",
        SvfopSessionUser => "SESSION_USER",
        SvfopCurrentCatalog => "CURRENT_CATALOG",
        SvfopCurrentSchema => "CURRENT_SCHEMA",
        _ => "",
    }
}

/// `LockingClause.strength` → the keyword following `FOR`, e.g.
/// `LcsForupdate → "UPDATE"`.
pub fn lock_clause_strength(s: LockClauseStrength) -> &'static str {
    use LockClauseStrength::*;
    match s {
        LcsForkeyshare => "KEY SHARE",
        LcsForshare => "SHARE",
        LcsFornokeyupdate => "NO KEY UPDATE",
        LcsForupdate => "UPDATE",
        _ => "",
    }
}

/// `LockStmt.mode`, a raw `LOCKMODE` int (1..8, not a protobuf enum) → the
/// table-lock keyword `LOCK ... IN <mode> MODE` expects.
pub fn lock_mode(mode: i32) -> &'static str {
    match mode {
        1 => "ACCESS SHARE",
        2 => "ROW SHARE",
        3 => "ROW EXCLUSIVE",
        4 => "SHARE UPDATE EXCLUSIVE",
        5 => "SHARE",
        6 => "SHARE ROW EXCLUSIVE",
        7 => "EXCLUSIVE",
        8 => "ACCESS EXCLUSIVE",
        _ => "",
    }
}

/// `cmd_type` → keyword, used by `RuleStmt`'s `ON <event>`.
pub fn cmd_type(t: CmdType) -> &'static str {
    use CmdType::*;
    match t {
        CmdSelect => "SELECT",
        CmdUpdate => "UPDATE",
        CmdInsert => "INSERT",
        CmdDelete => "DELETE",
        _ => "",
    }
}

/// `pg_catalog.<name>` → the SQL-standard spelling, e.g. `int4 → "int"`.
/// Only types `pg_query` qualifies with the `pg_catalog` schema need this;
/// anything else passes through unmapped.
pub fn pg_catalog_type(name: &str) -> Option<&'static str> {
    let mapped = match name {
        "bpchar" => "char",
        "varchar" => "varchar",
        "int2" => "smallint",
        "int4" => "int",
        "int8" => "bigint",
        "float4" => "real",
        "float8" => "double precision",
        "bool" => "boolean",
        "interval" => "interval",
        "numeric" => "numeric",
        "text" => "text",
        "timestamp" => "timestamp",
        "timestamptz" => "timestamp with time zone",
        "time" => "time",
        "timetz" => "time with time zone",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_keywords() {
        assert_eq!(object_type_keyword(ObjectType::ObjectTable), "TABLE");
        assert_eq!(object_type_keyword(ObjectType::ObjectMatview), "MATERIALIZED VIEW");
    }

    #[test]
    fn constraint_type_keywords() {
        assert_eq!(constraint_type_keyword(ConstrType::ConstrPrimary), "PRIMARY KEY");
        assert_eq!(constraint_type_keyword(ConstrType::ConstrNotnull), "NOT NULL");
    }

    #[test]
    fn alter_table_subtype_keywords() {
        assert_eq!(
            alter_table_subtype_keyword(AlterTableType::AtSetNotNull),
            ("ALTER", "SET NOT NULL")
        );
    }

    #[test]
    fn lock_mode_keywords() {
        assert_eq!(lock_mode(1), "ACCESS SHARE");
        assert_eq!(lock_mode(8), "ACCESS EXCLUSIVE");
        assert_eq!(lock_mode(0), "");
    }

    #[test]
    fn lock_clause_strength_keywords() {
        assert_eq!(lock_clause_strength(LockClauseStrength::LcsForupdate), "UPDATE");
        assert_eq!(lock_clause_strength(LockClauseStrength::LcsForshare), "SHARE");
    }

    #[test]
    fn sql_value_function_op_keywords() {
        assert_eq!(sql_value_function_op(SqlValueFunctionOp::SvfopCurrentDate), "CURRENT_DATE");
        assert_eq!(sql_value_function_op(SqlValueFunctionOp::SvfopUser), "USER");
    }

    #[test]
    fn pg_catalog_type_mappings() {
        assert_eq!(pg_catalog_type("int4"), Some("int"));
        assert_eq!(pg_catalog_type("timestamptz"), Some("timestamp with time zone"));
        assert_eq!(pg_catalog_type("jsonb"), None);
    }
}
