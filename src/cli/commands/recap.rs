use crate::config::Config;
use crate::core::recap::{block_averages, overall_average};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::chart::render_bar_chart;

/// Show the average progress per block over the reported entries.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(&cfg.data_dir)?;
    let archive = store.load_archive()?;

    if archive.is_empty() {
        info("No reported entries yet. Nothing to recap.");
        return Ok(());
    }

    let averages = block_averages(&archive);

    println!("RATA-RATA PROGRESS PER BLOK:\n");
    print!("{}", render_bar_chart(&averages));

    println!(
        "\nTOTAL Rata-rata Semua Blok: {:.2}%",
        overall_average(&averages)
    );

    Ok(())
}
