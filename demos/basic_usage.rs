//! Basic usage example for the adbc-adapter crate.
//!
//! Uses the SQLite ADBC driver against an in-memory database. Set
//! `ADBC_DRIVER_TYPE`, `ADBC_CONN_STR` or `ADBC_DB_KWARGS` to try another
//! database.

use adbc_adapter::{init_logging, Adapter, AdapterConfig, CatalogItem, Connection, LogConfig};
use std::env;
use std::error::Error;

const DRIVER_TYPE: &str = "sqlite";
const CONN_STR: &str = ":memory:";
const ROW_LIMIT: usize = 2;

/// Builds the adapter from environment overrides and connects.
fn example_connection() -> Result<Connection, Box<dyn Error>> {
    let mut config = AdapterConfig::new(env::var("ADBC_CONN_STR").unwrap_or(CONN_STR.into()))
        .with_driver_type(env::var("ADBC_DRIVER_TYPE").unwrap_or(DRIVER_TYPE.into()));
    if let Ok(kwargs) = env::var("ADBC_DB_KWARGS") {
        config = config.with_db_kwargs(kwargs);
    }

    let adapter = Adapter::new(config)?;
    println!("Using {}", adapter);
    Ok(adapter.connect()?)
}

/// Creates and fills a table; statements without result columns return `None`.
fn example_ddl(conn: &mut Connection) -> Result<(), Box<dyn Error>> {
    let statements = [
        "CREATE TABLE \"Test Example\" (id INTEGER, name TEXT, score REAL)",
        "INSERT INTO \"Test Example\" VALUES (1, 'Alice', 9.5)",
        "INSERT INTO \"Test Example\" VALUES (2, 'Bob', 7.25)",
        "INSERT INTO \"Test Example\" VALUES (3, 'Charlie', 8.0)",
    ];
    for sql in statements {
        assert!(conn.execute(sql)?.is_none());
    }
    Ok(())
}

/// Selects with a row limit and prints column labels.
fn example_limited_select(conn: &mut Connection) -> Result<usize, Box<dyn Error>> {
    let Some(cursor) = conn.execute("SELECT id, name, score FROM \"Test Example\" ORDER BY id")?
    else {
        return Ok(0);
    };

    let labels: Vec<String> = cursor
        .columns()?
        .into_iter()
        .map(|c| format!("{} [{}]", c.name, c.type_label))
        .collect();
    println!("Columns: {}", labels.join(", "));

    let batch = cursor.set_limit(ROW_LIMIT).fetchall()?;
    Ok(batch.num_rows())
}

fn print_tree(item: &CatalogItem, depth: usize) {
    println!(
        "{}{} ({}) -> {}",
        "  ".repeat(depth),
        item.label,
        item.type_label,
        item.query_name
    );
    for child in &item.children {
        print_tree(child, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging(&LogConfig::default())?;

    let mut conn = example_connection()?;

    example_ddl(&mut conn)?;

    let rows = example_limited_select(&mut conn)?;
    println!("Limited select: {} row(s)", rows);

    match conn.execute("SELEC 1") {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{}\n  {}", e.title(), e),
    }

    for database in conn.get_catalog()?.items {
        print_tree(&database, 0);
    }

    println!("Done");
    Ok(())
}
