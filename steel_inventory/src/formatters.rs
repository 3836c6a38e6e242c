use crate::models::{SteelForm, SteelItem};
use crate::totals::Totals;

/// Totals line as shown under the item list
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Total weight: {}    Total length: {}",
        totals.weight_text(),
        totals.length_text()
    )
}

/// Plain-text table of all items followed by the totals line
pub fn format_item_table(items: &[SteelItem], totals: &Totals) -> String {
    let rows: Vec<[String; 6]> = items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.display_name().to_string(),
                item.code.clone(),
                item.weight.to_string(),
                item.length.to_string(),
                item.thickness.to_string(),
            ]
        })
        .collect();

    let header = ["ID", "Name", "Code", "Weight (t)", "Length (m)", "Thickness"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &header.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    output.push_str(&"-".repeat(rule_len));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("(no items)\n");
    }
    for row in &rows {
        push_row(&mut output, row, &widths);
    }

    output.push('\n');
    output.push_str(&format_totals(totals));
    output.push('\n');
    output
}

fn push_row(output: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Form fields loaded for editing, one per line
pub fn format_form(form: &SteelForm) -> String {
    format!(
        "name: {}\ncode: {}\nweight: {}\nlength: {}\nthickness: {}\n",
        form.name, form.code, form.weight, form.length, form.thickness
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn item(id: i64, name: Option<&str>, code: &str, weight: &str) -> SteelItem {
        SteelItem {
            id: ItemId(id),
            name: name.map(String::from),
            code: code.to_string(),
            weight: weight.parse().unwrap(),
            length: "10".parse().unwrap(),
            thickness: "3".parse().unwrap(),
        }
    }

    #[test]
    fn totals_line_has_unit_suffixes() {
        let items = [item(1, None, "A1", "2.5")];
        let line = format_totals(&Totals::from_items(&items).unwrap());
        assert_eq!(line, "Total weight: 2.5 t    Total length: 10 m");
    }

    #[test]
    fn table_lists_every_item_aligned() {
        let items = [
            item(1, Some("Sheet"), "A1", "2.5"),
            item(12, None, "LONGCODE", "100.25"),
        ];
        let table = format_item_table(&items, &Totals::from_items(&items).unwrap());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("ID  Name   Code"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("1   Sheet  A1"));
        assert!(lines[3].starts_with("12         LONGCODE  100.25"));
        assert_eq!(
            lines.last().copied(),
            Some("Total weight: 102.75 t    Total length: 20 m")
        );
    }

    #[test]
    fn empty_table_says_so() {
        let table = format_item_table(&[], &Totals::default());
        assert!(table.contains("(no items)"));
        assert!(table.contains("Total weight: 0 t"));
    }

    #[test]
    fn form_lists_fields() {
        let form = SteelForm {
            name: String::new(),
            code: "A1".to_string(),
            weight: "4.0".to_string(),
            length: "15".to_string(),
            thickness: "3".to_string(),
        };
        let text = format_form(&form);
        assert!(text.starts_with("name: \ncode: A1\n"));
        assert!(text.contains("weight: 4.0\n"));
    }
}
