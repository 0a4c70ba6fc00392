#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table. Numeric cells are right-aligned; columns shrink
/// (widest first) until the table fits `max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| {
                let floor = headers
                    .get(*idx)
                    .map_or(0, |h| h.chars().count())
                    .max(MIN_COLUMN_WIDTH);
                **width > floor
            })
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn colorize_status(padded: &str, text: &str) -> String {
    let code = match text.trim() {
        "true" | "pass" => "32",
        "false" | "fail" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_columns() {
        let rows = vec![
            vec!["comment-emails".to_string(), "12".to_string()],
            vec!["known-user".to_string(), "3".to_string()],
        ];
        let out = render_table(&["name", "ms"], &rows, PLAIN);
        assert_eq!(
            out,
            [
                "name            ms",
                "----------------------",
                "comment-emails      12",
                "known-user           3",
            ]
            .join("\n")
        );
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![vec!["x".repeat(50), "ok".to_string()]];
        let out = render_table(
            &["detail", "status"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let row = out.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 30);
        assert!(row.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let out = render_table(&["a", "b"], &rows, PLAIN);
        assert!(out.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn colors_pass_and_fail() {
        let rows = vec![vec!["true".to_string()], vec!["false".to_string()]];
        let out = render_table(
            &["passed"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("\u{1b}[32mtrue"));
        assert!(out.contains("\u{1b}[31mfalse"));
    }
}
