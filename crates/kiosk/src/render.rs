//! Plain-text rendering of the view models for the terminal shell.

use core::fmt;

use crate::session::Redraw;
use crate::view::{CategoryTab, MenuView, ProductGrid, ReviewPanel, SummaryBar};

/// Category buttons on one line, the selected one bracketed.
pub fn render_tabs(tabs: &[CategoryTab]) -> String {
    tabs.iter()
        .map(|t| {
            if t.selected {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ProductGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "  (nenhum produto em {})", self.category.label());
        }
        for card in &self.cards {
            writeln!(
                f,
                "  #{:<4} {:<30} {:>10}   [-] {} [+]",
                card.product_id, card.name, card.price_label, card.quantity
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SummaryBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}    ({})", self.text, self.review_label)
    }
}

impl fmt::Display for ReviewPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for row in &self.rows {
            writeln!(
                f,
                "  #{:<4} {}x {:<30} {:>10}   [-] [+]",
                row.product_id, row.quantity, row.name, row.line_total_label
            )?;
        }
        writeln!(f, "  ----")?;
        writeln!(f, "  {}", self.total_text)?;
        writeln!(f, "  {}: {}", self.checkout.label, self.checkout.url)
    }
}

impl fmt::Display for MenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", render_tabs(&self.categories))?;
        write!(f, "{}", self.grid)?;
        write!(f, "{}", self.summary)?;
        if let Some(review) = &self.review {
            write!(f, "{review}")?;
        }
        Ok(())
    }
}

/// Only the regions flagged in `redraw`.
pub fn render_regions(view: &MenuView, redraw: Redraw) -> String {
    let mut out = String::new();
    if redraw.categories {
        out.push_str(&render_tabs(&view.categories));
        out.push('\n');
    }
    if redraw.grid {
        out.push_str(&view.grid.to_string());
    }
    if redraw.summary {
        out.push_str(&view.summary.to_string());
    }
    if redraw.review {
        match &view.review {
            Some(panel) => out.push_str(&panel.to_string()),
            None => out.push_str("(revisão fechada)\n"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::category_tabs;
    use digimenu_catalog::Category;

    #[test]
    fn selected_tab_is_bracketed() {
        let line = render_tabs(&category_tabs(Category::Bebidas));
        assert!(line.contains("[Bebidas]"));
        assert!(line.contains(" Lanches "));
    }

    #[test]
    fn empty_grid_renders_placeholder() {
        let grid = ProductGrid {
            category: Category::Sobremesas,
            cards: Vec::new(),
        };
        assert_eq!(grid.to_string(), "  (nenhum produto em Sobremesas)\n");
    }
}
