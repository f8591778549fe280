// src/export/xlsx.rs

use crate::core::recap::{block_averages, overall_average};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::ArchivedRecord;
use crate::ui::messages::info;
use crate::utils::formatting::{format_percent, format_rupiah};
use chrono::NaiveDate;
use rust_xlsxwriter::{
    Chart, ChartType, Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Laporan";
const TABLE_HEADERS: [&str; 5] = ["NO", "TANGGAL", "ITEM PEKERJAAN", "PROSENTASE", "NILAI SPK"];

/// Export the archive as a styled workbook: one bordered table per block in
/// first-seen order, a subtotal per block, the overall mean of the block
/// means, and a bar chart of the per-block averages at the bottom.
///
/// Callers must not invoke this with an empty archive; the command layer
/// shows an informational message instead.
pub fn export_xlsx(archive: &[ArchivedRecord], path: &Path, per_date: NaiveDate) -> AppResult<()> {
    info(format!("Exporting report to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    // ---------------------------
    // Styles
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    let block_format = Format::new().set_bold().set_font_size(12);
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xBDD7EE))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new().set_border(FormatBorder::Thin);
    let italic_format = Format::new().set_italic();
    let bold_format = Format::new().set_bold();

    // ---------------------------
    // Title
    // ---------------------------
    worksheet.write_with_format(0, 0, "LAPORAN PROGRESS PEMBANGUNAN", &title_format)?;
    worksheet.write(
        1,
        0,
        format!("Per Tanggal: {}", per_date.format("%Y-%m-%d")),
    )?;

    // ---------------------------
    // Group by block, first-seen order
    // ---------------------------
    let mut groups: Vec<(&str, Vec<&ArchivedRecord>)> = Vec::new();
    for rec in archive {
        match groups.iter_mut().find(|(block, _)| *block == rec.block) {
            Some((_, rows)) => rows.push(rec),
            None => groups.push((rec.block.as_str(), vec![rec])),
        }
    }

    let mut col_widths: Vec<usize> = TABLE_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // One table per block
    // ---------------------------
    let mut row: u32 = 3;

    for (block, records) in &groups {
        worksheet.write_with_format(row, 0, format!("BLOK {block}"), &block_format)?;
        row += 1;

        for (col, header) in TABLE_HEADERS.iter().enumerate() {
            worksheet.write_with_format(row, col as u16, *header, &header_format)?;
        }
        row += 1;

        for (i, rec) in records.iter().enumerate() {
            let values = [
                (i + 1).to_string(),
                rec.date_str(),
                rec.item.clone(),
                format_percent(rec.percent),
                format_rupiah(rec.contract_value),
            ];

            for (col, value) in values.iter().enumerate() {
                worksheet.write_with_format(row, col as u16, value.as_str(), &cell_format)?;
                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
            }
            row += 1;
        }

        // Subtotal: mean completion over this block's entries
        let subtotal: f64 =
            records.iter().map(|r| f64::from(r.percent)).sum::<f64>() / records.len() as f64;

        worksheet.write_with_format(
            row,
            0,
            format!("Subtotal Blok {block} (Rata-rata Progres):"),
            &italic_format,
        )?;
        worksheet.write_with_format(row, 3, format!("{subtotal:.2}%"), &bold_format)?;
        row += 2;
    }

    // ---------------------------
    // Overall total: mean of the per-block means
    // ---------------------------
    let averages = block_averages(archive);
    let overall = overall_average(&averages);

    worksheet.write_with_format(row, 0, "TOTAL Rata-rata Semua Blok:", &bold_format)?;
    worksheet.write_with_format(row, 3, format!("{overall:.2}%"), &bold_format)?;

    // ---------------------------
    // Chart data table + embedded bar chart
    // ---------------------------
    let mut chart_row = row + 4;

    worksheet.write_with_format(chart_row, 0, "Grafik Rata-rata Progress per Blok", &bold_format)?;
    chart_row += 1;

    worksheet.write_with_format(chart_row, 0, "Blok", &bold_format)?;
    worksheet.write_with_format(chart_row, 1, "Progres", &bold_format)?;
    chart_row += 1;

    let data_first = chart_row;
    for (i, (block, avg)) in averages.iter().enumerate() {
        worksheet.write(data_first + i as u32, 0, block.as_str())?;
        worksheet.write(data_first + i as u32, 1, *avg)?;
    }
    let data_last = data_first + averages.len() as u32 - 1;

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_values((SHEET_NAME, data_first, 1, data_last, 1))
        .set_categories((SHEET_NAME, data_first, 0, data_last, 0));
    chart.title().set_name("Rata-rata Progress per Blok");
    chart.y_axis().set_name("% Progres");
    chart.x_axis().set_name("Blok");

    worksheet.insert_chart(data_first, 4, &chart)?;

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}
