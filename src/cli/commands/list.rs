use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, format_percent, format_rupiah};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { reported } = cmd {
        let store = Store::open(&cfg.data_dir)?;

        if *reported {
            print_reported(&store)?;
        } else {
            print_pending(&store)?;
        }
    }
    Ok(())
}

/// Pending entries, numbered in insertion order. The number is what the
/// `report` command takes.
fn print_pending(store: &Store) -> AppResult<()> {
    let pending = store.load_pending()?;

    if pending.is_empty() {
        info("No pending entries yet.");
        return Ok(());
    }

    println!("PENDING ENTRIES:");
    for (i, rec) in pending.iter().enumerate() {
        println!(
            "{:>3}. {} | {} | {} | {} | {}",
            i + 1,
            bold(&rec.block),
            rec.date_str(),
            rec.item,
            format_percent(rec.percent),
            format_rupiah(rec.contract_value),
        );
    }

    Ok(())
}

fn print_reported(store: &Store) -> AppResult<()> {
    let archive = store.load_archive()?;

    if archive.is_empty() {
        info("No reported entries yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        "Blok",
        "Tanggal",
        "Item",
        "Prosentase",
        "Nilai SPK",
        "Tanggal Laporan",
    ]);

    for rec in &archive {
        table.add_row(vec![
            rec.block.clone(),
            rec.date_str(),
            rec.item.clone(),
            format_percent(rec.percent),
            format_rupiah(rec.contract_value),
            rec.report_date_str(),
        ]);
    }

    println!("REPORTED ENTRIES:");
    print!("{}", table.render());

    Ok(())
}
