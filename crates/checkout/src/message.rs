//! Order message: structured lines first, text second.

use serde::Serialize;

use arcano_cart::{CartEntry, CartSummary};
use arcano_core::{Centavos, CurrencyFormatter};

/// Fixed inquiry sent when the cart is empty.
pub const GENERIC_INQUIRY: &str =
    "Hola, quiero información sobre el catálogo de Taller Arcano 3D.";

/// Fixed inquiry for the storefront's contact link (no cart involved).
pub const CONTACT_INQUIRY: &str =
    "Hola, me interesa el catálogo de Taller Arcano 3D.";

/// One line of the outbound order, derived from a cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub name: String,
    pub size: Option<String>,
    pub quantity: u32,
    /// Line total in centavos, as the cart computed it.
    pub line_total: Centavos,
}

/// The order as structured data, captured from the cart in entry order.
///
/// Rendering is deterministic for a given message and formatter; the total
/// comes from the cart's own summary, never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMessage {
    lines: Vec<OrderLine>,
    summary: CartSummary,
}

impl OrderMessage {
    pub fn from_cart(entries: &[CartEntry], summary: CartSummary) -> Self {
        let lines = entries
            .iter()
            .map(|entry| OrderLine {
                name: sanitize(&entry.product.name),
                size: entry.product.size.as_deref().map(sanitize),
                quantity: entry.quantity,
                line_total: entry.line_total(),
            })
            .collect();
        Self { lines, summary }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the plain-text message (unencoded; the deep link encodes it).
    pub fn render(&self, formatter: &CurrencyFormatter) -> String {
        if self.is_empty() {
            return GENERIC_INQUIRY.to_owned();
        }

        let mut text = String::from("Hola, quiero hacer un pedido en *Taller Arcano 3D*:\n\n");
        for line in &self.lines {
            let size = line.size.as_deref().unwrap_or("");
            text.push_str(&format!(
                "• {} ({}) x {} - {}\n",
                line.name,
                size,
                line.quantity,
                formatter.format(line.line_total)
            ));
        }
        text.push_str(&format!(
            "\nTotal aproximado: *{}* {}\n",
            formatter.format(self.summary.total),
            formatter.code()
        ));
        text.push_str("\nUbicación: _______\nForma de pago (efectivo/transferencia): _______\n");
        text.push_str("\n¿Tienes disponibilidad para entrega/envío?");
        text
    }
}

/// Replace control characters in product-derived text with a space.
///
/// Percent-encoding makes any character transport-safe, but a control
/// character would still corrupt the message layout at the destination, so
/// it gets a placeholder instead.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcano_cart::CartStore;
    use arcano_catalog::parse_catalog;
    use arcano_core::ProductId;

    fn store_with(items: &[&str]) -> CartStore {
        let catalog = parse_catalog(
            r#"[
                {"id":"a","name":"Skull","price":150,"category":"figuras-3d"},
                {"id":"b","name":"Candle","price":80,"category":"velas-rituales","size":"10 cm"}
            ]"#,
        )
        .unwrap();
        let mut store = CartStore::new(catalog);
        for item in items {
            store.add_item(&ProductId::new(*item)).unwrap();
        }
        store
    }

    fn message_for(items: &[&str]) -> String {
        let store = store_with(items);
        OrderMessage::from_cart(store.entries(), store.summarize())
            .render(&CurrencyFormatter::default())
    }

    #[test]
    fn empty_cart_renders_the_fixed_inquiry() {
        assert_eq!(message_for(&[]), GENERIC_INQUIRY);
    }

    #[test]
    fn example_scenario_renders_both_lines_and_the_total() {
        let text = message_for(&["a", "a", "b"]);
        assert!(text.contains("• Skull () x 2 - $300.00"));
        assert!(text.contains("• Candle (10 cm) x 1 - $80.00"));
        assert!(text.contains("Total aproximado: *$380.00* MXN"));
    }

    #[test]
    fn footer_carries_the_fixed_boilerplate() {
        let text = message_for(&["a"]);
        assert!(text.contains("Ubicación: _______"));
        assert!(text.contains("Forma de pago (efectivo/transferencia): _______"));
        assert!(text.contains("¿Tienes disponibilidad para entrega/envío?"));
    }

    #[test]
    fn lines_follow_cart_insertion_order() {
        let store = store_with(&["b", "a"]);
        let message = OrderMessage::from_cart(store.entries(), store.summarize());
        let names: Vec<&str> = message.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Candle", "Skull"]);
    }

    #[test]
    fn rendered_total_matches_the_cart_summary() {
        let store = store_with(&["a", "b", "b"]);
        let summary = store.summarize();
        let text = OrderMessage::from_cart(store.entries(), summary)
            .render(&CurrencyFormatter::default());
        let formatted = CurrencyFormatter::default().format(summary.total);
        assert!(text.contains(&formatted));
    }

    #[test]
    fn control_characters_in_product_text_are_replaced() {
        assert_eq!(sanitize("Skull\nof\tDoom"), "Skull of Doom");
        assert_eq!(sanitize("plain"), "plain");
    }
}
