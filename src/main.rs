use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use simplelog::{Config, LevelFilter, SimpleLogger};

use order_table::ui::format::{format_cell, DefaultFormatter};
use order_table::{order_columns, EngineConfig, ImportService, Order, ViewStore};

fn default_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "order-table", "order-table")
        .ok_or_else(|| anyhow!("failed to resolve user data directory"))?;
    Ok(dirs.data_dir().join("orders.sqlite"))
}

fn print_page(store: &ViewStore<Order>) {
    let formatter = DefaultFormatter::for_orders();
    let columns = store.visible_columns();
    let page = store.page();

    let header: Vec<&str> = columns.iter().map(|column| column.label).collect();
    println!("{}", header.join(" | "));

    if page.rows.is_empty() {
        println!("No results found.");
    }
    for order in &page.rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| format_cell(&formatter, *column, *order))
            .collect();
        println!("{}", cells.join(" | "));
    }

    println!(
        "{} of {} row(s) selected. Page {}/{}",
        page.total_selected_in_filtered,
        page.total_filtered,
        page.page_index + 1,
        page.page_count
    );
}

fn main() -> Result<()> {
    SimpleLogger::init(LevelFilter::Info, Config::default())
        .context("failed to initialize logger")?;

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => default_db_path()?,
    };
    let search = args.next();

    let orders = ImportService::load_path(&path)?;
    let mut store = ViewStore::new(orders, order_columns(), EngineConfig::default())?;
    store.set_column_visibility("imageUrl", false);
    if let Some(search) = search {
        store.set_global_search(&search);
    }

    print_page(&store);
    Ok(())
}
