/// Renders left-aligned columns separated by two spaces. Cells may carry
/// ANSI colour codes; widths are computed on the visible text.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(visible_width(cell));
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(headers, &widths));
    for row in rows {
        let cells = row.iter().map(|c| c.as_str()).collect::<Vec<_>>();
        lines.push(format_row(&cells, &widths));
    }

    lines.join("\n")
}

/// Two-column `KEY  value` listing for single objects.
pub fn render_fields(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("{key:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let pad = widths
                .get(idx)
                .map(|w| w.saturating_sub(visible_width(cell)))
                .unwrap_or(0);
            if idx == last {
                cell.to_string()
            } else {
                format!("{cell}{}", " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn visible_width(cell: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in cell.chars() {
        match (in_escape, ch) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_on_widest_cell() {
        let rendered = render_table(
            &["NAME", "STATUS"],
            &[
                vec!["_Node_0".into(), "Up".into()],
                vec!["n1".into(), "Down".into()],
            ],
        );
        assert_eq!(rendered, "NAME     STATUS\n_Node_0  Up\nn1       Down");
    }

    #[test]
    fn colour_codes_do_not_count_towards_width() {
        let rendered = render_table(
            &["HEALTH", "NAME"],
            &[vec!["\x1b[32mOk\x1b[0m".into(), "n0".into()]],
        );
        let row = rendered.lines().nth(1).expect("row");
        assert_eq!(row, "\x1b[32mOk\x1b[0m      n0");
    }

    #[test]
    fn fields_align_keys() {
        let rendered = render_fields(&[("NAME", "a".into()), ("VERSION", "1".into())]);
        assert_eq!(rendered, "NAME     a\nVERSION  1");
    }
}
