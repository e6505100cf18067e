//! Run summary table

use crate::core::styles::StyleRole;
use crate::index::TypeReport;
use prettytable::{format, Cell, Row, Table};

const HEADERS: [&str; 8] = [
    "type",
    "files seen",
    "releases indexed",
    "created",
    "replaced",
    "kept",
    "cleaned",
    "missing roots",
];

/// Build the per-type summary table
pub fn summary_table(reports: &[TypeReport], color_enabled: bool) -> Table {
    let header_spec = color_enabled
        .then(|| StyleRole::Header.to_prettytable_spec())
        .flatten();
    let name_spec = color_enabled
        .then(|| StyleRole::Literal.to_prettytable_spec())
        .flatten();

    let styled = |text: String, spec: &Option<String>| match spec {
        Some(spec) => Cell::new(&text).style_spec(&format!("b{}", spec)),
        None => Cell::new(&text),
    };
    let right = |value: usize| Cell::new(&value.to_string()).style_spec("r");

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(
        HEADERS
            .iter()
            .map(|h| styled(h.to_string(), &header_spec))
            .collect(),
    ));

    for report in reports {
        table.add_row(Row::new(vec![
            styled(report.media_type.to_string(), &name_spec),
            right(report.stats.files_seen),
            right(report.stats.releases_indexed),
            right(report.links.created),
            right(report.links.replaced),
            right(report.links.kept),
            right(report.cleaned),
            right(report.stats.roots_missing),
        ]));
    }
    table
}

/// Print the summary to stdout
pub fn print_summary(reports: &[TypeReport], dry_run: bool, color_enabled: bool) {
    if reports.is_empty() {
        println!("No media types enabled; nothing indexed.");
        return;
    }
    if dry_run {
        println!(
            "{}",
            StyleRole::Dim.paint("Dry run: no changes were made", color_enabled)
        );
    }
    summary_table(reports, color_enabled).printstd();
}
