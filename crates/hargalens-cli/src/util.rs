//! Output formatting helpers shared by the commands.

/// Formats a rupiah amount with thousands separators, e.g. `1,250,000,000`.
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Rounds a mean price to whole rupiah for display.
///
/// Prices in the dataset are non-negative; a negative mean would indicate
/// corrupt data, so it clamps to zero rather than rendering a sign.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn format_mean_rupiah(mean: f64) -> String {
    format_rupiah(mean.round().max(0.0) as u64)
}

/// Renders rows as an aligned text table with a header line.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells = headers.iter().map(|&h| h.to_string()).collect::<Vec<_>>();
    let mut lines = vec![render_row(&header_cells)];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    lines.extend(rows.iter().map(|row| render_row(row)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(0), "0");
        assert_eq!(format_rupiah(999), "999");
        assert_eq!(format_rupiah(1_000), "1,000");
        assert_eq!(format_rupiah(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn test_format_mean_rounds_and_clamps() {
        assert_eq!(format_mean_rupiah(1500.4), "1,500");
        assert_eq!(format_mean_rupiah(1500.5), "1,501");
        assert_eq!(format_mean_rupiah(-3.0), "0");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &["City", "Count"],
            &[
                vec!["Jakarta Selatan".into(), "12".into()],
                vec!["Bogor".into(), "3".into()],
            ],
        );
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "City             Count");
        assert_eq!(lines[2], "Jakarta Selatan  12");
        assert_eq!(lines[3], "Bogor            3");
    }
}
