use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response that can also be shown as an aligned table.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;

    fn rows(&self) -> Vec<Vec<String>>;

    /// Line printed under the table, if any.
    fn footer(&self) -> Option<String> {
        None
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// One compact JSON document per line.
pub fn to_ndjson<T: Serialize>(items: &[T]) -> anyhow::Result<String> {
    let mut out = String::new();
    for item in items {
        out.push_str(&serde_json::to_string(item)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_table<T: Tabular>(value: &T) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let rows = value.rows();
    let mut rendered = if rows.is_empty() {
        String::from("(no rows)")
    } else {
        table::render_table(&value.headers(), &rows, options)
    };
    if let Some(footer) = value.footer() {
        rendered.push('\n');
        rendered.push_str(&footer);
    }
    rendered
}
