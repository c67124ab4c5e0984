//! Human-readable console rendering of a run.

use std::io::{self, Write};

use catalogcheck_products::ValidationError;

use crate::report::{EXPECTED_STATUS, Report};

const TITLE_MAX_CHARS: usize = 30;
const TITLE_KEEP_CHARS: usize = 27;
const COLUMN_PADDING: usize = 2;

pub fn render_banner<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "API Tester - FakeStore API Validation")?;
    writeln!(out, "=====================================")?;
    writeln!(out)?;
    writeln!(out, "Testing API: {url}")?;
    writeln!(out)
}

pub fn render_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "Test 1: Verify server response code")?;
    writeln!(out, "Status Code: {}", report.status_code)?;
    if report.status_code_valid {
        writeln!(out, "✅ Status code is {EXPECTED_STATUS} OK")?;
    } else {
        writeln!(
            out,
            "❌ Expected status code {EXPECTED_STATUS}, got {}",
            report.status_code
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Test 2: Validate product attributes")?;
    writeln!(out, "Total products: {}", report.total_products)?;
    writeln!(out, "Products with defects: {}", report.defect_count)?;
    writeln!(out)?;

    if report.has_defects() {
        writeln!(out, "Defective Products:")?;
        writeln!(out, "-----------------")?;
        render_defects(out, &report.defects)
    } else {
        writeln!(out, "✅ No defects found in any products")
    }
}

/// Column-aligned table of defects; the last column is left unpadded.
pub fn render_defects<W: Write>(out: &mut W, defects: &[ValidationError]) -> io::Result<()> {
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(defects.len() + 2);
    rows.push(["ID", "Title", "Field", "Issue", "Value"].map(String::from));
    rows.push(["--", "-----", "-----", "-----", "-----"].map(String::from));
    rows.extend(defects.iter().map(|d| {
        [
            d.product_id.to_string(),
            display_title(&d.title),
            d.field.to_string(),
            d.message.clone(),
            d.actual_value.to_string(),
        ]
    }));

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in &rows {
        let mut line = String::new();
        for (cell, width) in row.iter().zip(widths.iter()) {
            line.push_str(&format!("{cell:<w$}", w = width + COLUMN_PADDING));
        }
        line.push_str(&row[4]);
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Title as shown in the table: `<empty>` for empty titles, long ones shortened.
pub fn display_title(title: &str) -> String {
    if title.is_empty() {
        return "<empty>".to_string();
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        let kept: String = title.chars().take(TITLE_KEEP_CHARS).collect();
        return format!("{kept}...");
    }
    title.to_string()
}
