//! Typed view-model for the wishlist screen.

use std::fmt;

use wl_api_types::{Wishlist, WishlistItem};

/// Everything the screen shows. Field values are the raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub wishlist_id: String,
    pub wishlist_name: String,
    pub owner_id: String,
    pub item_id: String,
    pub product_name: String,
    pub product_id: String,
    pub item_quantity: String,
    pub flash: String,
    pub wishlist_results: Option<ResultTable>,
    pub item_results: Option<ResultTable>,
}

impl FormView {
    pub fn show_wishlist(&mut self, wishlist: &Wishlist) {
        self.wishlist_id = wishlist.id.to_string();
        self.wishlist_name = wishlist.name.clone();
        self.owner_id = wishlist.owner_id.to_string();
    }

    /// Also moves the wishlist id field to the item's wishlist.
    pub fn show_item(&mut self, item: &WishlistItem) {
        self.wishlist_id = item.wishlist_id.to_string();
        self.item_id = item.id.to_string();
        self.product_name = item.product_name.clone();
        self.product_id = item.product_id.to_string();
        self.item_quantity = item.item_quantity.to_string();
    }

    /// Blank every input and both result areas. The flash message is kept.
    pub fn clear(&mut self) {
        *self = FormView {
            flash: std::mem::take(&mut self.flash),
            ..FormView::default()
        };
    }

    pub fn fields_blank(&self) -> bool {
        [
            &self.wishlist_id,
            &self.wishlist_name,
            &self.owner_id,
            &self.item_id,
            &self.product_name,
            &self.product_id,
            &self.item_quantity,
        ]
        .iter()
        .all(|v| v.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub class: &'static str,
}

const WISHLIST_COLUMNS: &[Column] = &[
    Column { title: "Wishlist ID", class: "col-md-2" },
    Column { title: "Name", class: "col-md-5" },
    Column { title: "Owner ID", class: "col-md-5" },
];

const ITEM_COLUMNS: &[Column] = &[
    Column { title: "Item ID", class: "col-md-1" },
    Column { title: "Name", class: "col-md-3" },
    Column { title: "Product ID", class: "col-md-4" },
    Column { title: "Quantity", class: "col-md-2" },
];

/// Search results, one row per resource in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: &'static [Column],
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn wishlists(wishlists: &[Wishlist]) -> Self {
        Self {
            columns: WISHLIST_COLUMNS,
            rows: wishlists
                .iter()
                .map(|w| vec![w.id.to_string(), w.name.clone(), w.owner_id.to_string()])
                .collect(),
        }
    }

    pub fn items(items: &[WishlistItem]) -> Self {
        Self {
            columns: ITEM_COLUMNS,
            rows: items
                .iter()
                .map(|i| {
                    vec![
                        i.id.to_string(),
                        i.product_name.clone(),
                        i.product_id.to_string(),
                        i.item_quantity.to_string(),
                    ]
                })
                .collect(),
        }
    }

    /// Table markup for the results container. Every cell is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table table-striped" cellpadding="10">"#);
        html.push_str("<thead><tr>");
        for column in self.columns {
            html.push_str(&format!(
                r#"<th class="{}">{}</th>"#,
                column.class,
                escape_html(column.title)
            ));
        }
        html.push_str("</tr></thead><tbody>");
        for (i, row) in self.rows.iter().enumerate() {
            html.push_str(&format!(r#"<tr id="row_{i}">"#));
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.title.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c.title, w = *w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("  "))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }
        Ok(())
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist(id: i64, name: &str) -> Wishlist {
        Wishlist {
            id,
            name: name.to_owned(),
            owner_id: 7,
            created_at: None,
            wishlist_items: Vec::new(),
        }
    }

    #[test]
    fn server_text_is_escaped_in_markup() {
        let table = ResultTable::wishlists(&[wishlist(1, "<script>alert('x')</script>")]);
        let html = table.to_html();
        assert!(html.contains("<td>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn rows_are_numbered_in_order() {
        let table = ResultTable::wishlists(&[wishlist(1, "a"), wishlist(2, "b")]);
        let html = table.to_html();
        assert!(html.contains(r#"<tr id="row_0"><td>1</td>"#));
        assert!(html.contains(r#"<tr id="row_1"><td>2</td>"#));
        assert!(html.contains(r#"<th class="col-md-2">Wishlist ID</th>"#));
    }

    #[test]
    fn clear_keeps_flash_only() {
        let mut view = FormView {
            wishlist_id: "5".to_owned(),
            product_name: "Lamp".to_owned(),
            flash: "Success".to_owned(),
            item_results: Some(ResultTable::items(&[])),
            ..FormView::default()
        };
        view.clear();
        assert!(view.fields_blank());
        assert_eq!(view.item_results, None);
        assert_eq!(view.flash, "Success");
    }

    #[test]
    fn text_table_aligns_columns() {
        let table = ResultTable::wishlists(&[wishlist(12, "Birthday")]);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Wishlist ID  Name      Owner ID");
        assert_eq!(lines[2], "12           Birthday  7");
    }
}
