use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if use_color {
        cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
    } else {
        cell
    }
}

pub(crate) fn styled_cell(text: &str, color: Option<Color>, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    match color {
        Some(c) if use_color => cell.fg(c),
        _ => cell,
    }
}

/// Table with the standard preset, inner borders and a single-line header separator
pub(crate) fn create_styled_table(headers: &[&str], use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table.set_header(
        headers
            .iter()
            .map(|h| header_cell(h, use_color))
            .collect::<Vec<_>>(),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_headers_and_rows() {
        let mut table = create_styled_table(&["Command", "Description"], false);
        table.add_row(vec![
            styled_cell("status", None, false),
            styled_cell("Show current session status", Some(Color::Green), false),
        ]);
        let rendered = table.to_string();
        assert!(rendered.contains("Command"));
        assert!(rendered.contains("Show current session status"));
        assert!(!rendered.contains('\x1b'));
    }
}
