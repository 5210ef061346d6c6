//! Console rendering of item lists.

use crate::item::Item;

pub const EMPTY_NOTICE: &str = "No items available.";

const HEADERS: [&str; 4] = ["identifier", "name", "quantity", "price"];

// Quantity and price columns are right aligned
const NUMERIC: [bool; 4] = [false, false, true, true];

/// Render `items` as a grid with one row per item, or a notice if there are
/// none. The returned string ends with a newline.
pub fn render<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let rows = items
        .into_iter()
        .map(|item| {
            [
                item.identifier.clone(),
                item.name.clone(),
                item.quantity.to_string(),
                item.price.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return format!("{}\n", EMPTY_NOTICE);
    }

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();

    rule(&mut out, &widths, ('╒', '═', '╤', '╕'));
    line(&mut out, &widths, &HEADERS.map(|h| h.to_string()), false);
    rule(&mut out, &widths, ('╞', '═', '╪', '╡'));

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            rule(&mut out, &widths, ('├', '─', '┼', '┤'));
        }
        line(&mut out, &widths, row, true);
    }

    rule(&mut out, &widths, ('╘', '═', '╧', '╛'));

    out
}

fn rule(out: &mut String, widths: &[usize; 4], (left, fill, join, right): (char, char, char, char)) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(join);
        }
        out.extend(std::iter::repeat(fill).take(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn line(out: &mut String, widths: &[usize; 4], cells: &[String; 4], align_numbers: bool) {
    out.push('│');
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push('│');
        }
        let pad = " ".repeat(width - cell.chars().count());
        out.push(' ');
        if align_numbers && NUMERIC[i] {
            out.push_str(&pad);
            out.push_str(cell);
        } else {
            out.push_str(cell);
            out.push_str(&pad);
        }
        out.push(' ');
    }
    out.push('│');
    out.push('\n');
}
