//! pg-deparser CLI
//!
//! Reads a SQL statement (from a file argument or stdin) and prints it
//! back out through the deparser, under whatever [`FormatOptions`] the
//! flags select.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pg_deparser::FormatOptions;

#[derive(Parser, Debug)]
#[command(name = "pg-deparser")]
#[command(about = "Renders PostgreSQL parse trees back to SQL", long_about = None)]
struct Args {
    /// SQL file to read; omit to read from stdin
    file: Option<PathBuf>,

    /// Multi-line, indented output
    #[arg(long)]
    pretty: bool,

    /// Lowercase keywords instead of uppercase
    #[arg(long)]
    lower_keyword: bool,

    /// Uppercase type names instead of lowercase
    #[arg(long)]
    upper_type: bool,

    /// Statement length (chars) below which a pretty statement collapses
    /// back to a single line
    #[arg(long, default_value_t = 50)]
    simple_len: usize,

    /// Indentation string used in pretty mode
    #[arg(long, default_value = "    ")]
    padding: String,

    /// Omit the trailing statement terminator
    #[arg(long)]
    unterminated: bool,

    /// Print the tables referenced by each statement as JSON instead of
    /// rendering SQL
    #[arg(long)]
    extract_tables: bool,

    /// Print the `@name` parameters referenced by each statement as JSON
    /// instead of rendering SQL
    #[arg(long)]
    extract_params: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let sql = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let opt = FormatOptions {
        pretty: args.pretty,
        one_result_column_per_line: args.pretty,
        lower_keyword: args.lower_keyword,
        upper_type: args.upper_type,
        simple_len: args.simple_len,
        padding: &args.padding,
        unterminated: args.unterminated,
    };

    let result = pg_deparser::parse(&sql).context("failed to parse SQL")?;
    for node in pg_deparser::statements(&result) {
        if args.extract_tables {
            let tables = pg_deparser::extract_tables(&node);
            println!("{}", serde_json::to_string(&tables)?);
            continue;
        }
        if args.extract_params {
            let params = pg_deparser::extract_params(&node);
            println!("{}", serde_json::to_string(&params.0)?);
            continue;
        }
        let text =
            pg_deparser::print_with_options(&node, opt).context("failed to render statement")?;
        println!("{text}");
    }

    Ok(())
}
