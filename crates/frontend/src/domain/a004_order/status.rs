//! Order status presentation and the transitions offered in the UI.

use crate::shared::number_format::{format_int, format_money};
use contracts::domain::a004_order::{Order, OrderItem, OrderStatus};

pub fn badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Processing => "badge badge--info",
        OrderStatus::Shipped => "badge badge--info",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
        OrderStatus::Unknown => "badge",
    }
}

/// Statuses an order can be moved to: forward along the fulfilment chain,
/// or cancelled before it ships.
pub fn next_statuses(current: OrderStatus) -> Vec<OrderStatus> {
    match current {
        OrderStatus::Pending => vec![OrderStatus::Processing, OrderStatus::Cancelled],
        OrderStatus::Processing => vec![OrderStatus::Shipped, OrderStatus::Cancelled],
        OrderStatus::Shipped => vec![OrderStatus::Delivered],
        OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Unknown => Vec::new(),
    }
}

/// Only cancelled orders may be deleted from the admin.
pub fn can_delete(status: OrderStatus) -> bool {
    status == OrderStatus::Cancelled
}

/// Amounts shown under the order lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    /// Difference between the lines and the charged total, if positive
    pub discount: f64,
    pub total: f64,
}

pub fn totals(order: &Order) -> OrderTotals {
    let subtotal = if order.items.is_empty() {
        order.total_price
    } else {
        order.lines_total()
    };
    let discount = subtotal - order.total_price;
    OrderTotals {
        subtotal,
        discount: if discount > 0.005 { discount } else { 0.0 },
        total: order.total_price,
    }
}

/// One order line, formatted for the details table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    pub product: String,
    pub sku: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

impl From<&OrderItem> for LineRow {
    fn from(line: &OrderItem) -> Self {
        Self {
            product: line.product_name.clone(),
            sku: line.sku.clone().unwrap_or_default(),
            quantity: format_int(line.quantity),
            unit_price: format_money(line.unit_price),
            total: format_money(line.line_total()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(total_price: f64, lines: &[(i64, f64)]) -> Order {
        Order {
            id: 1,
            user_id: "u1".into(),
            customer_name: "Ann".into(),
            email: None,
            phone: None,
            shipping_address: None,
            status: OrderStatus::Pending,
            total_price,
            created_at: "2024-03-15T10:00:00Z".into(),
            items: lines
                .iter()
                .enumerate()
                .map(|(i, (qty, price))| OrderItem {
                    id: i as i64,
                    product_item_id: i as i64,
                    product_name: format!("P{}", i),
                    sku: None,
                    quantity: *qty,
                    unit_price: *price,
                })
                .collect(),
        }
    }

    #[test]
    fn test_totals_show_discount() {
        let t = totals(&order(90.0, &[(2, 25.0), (1, 50.0)]));
        assert_eq!(t.subtotal, 100.0);
        assert_eq!(t.discount, 10.0);
        assert_eq!(t.total, 90.0);
    }

    #[test]
    fn test_totals_without_lines_or_discount() {
        let t = totals(&order(42.0, &[]));
        assert_eq!((t.subtotal, t.discount, t.total), (42.0, 0.0, 42.0));

        // Surcharges are not shown as a negative discount
        let t = totals(&order(105.0, &[(1, 100.0)]));
        assert_eq!(t.discount, 0.0);
    }

    #[test]
    fn test_transitions() {
        assert_eq!(
            next_statuses(OrderStatus::Pending),
            vec![OrderStatus::Processing, OrderStatus::Cancelled]
        );
        assert_eq!(next_statuses(OrderStatus::Shipped), vec![OrderStatus::Delivered]);
        for status in OrderStatus::ALL {
            assert_eq!(next_statuses(status).is_empty(), status.is_final());
        }
        assert!(can_delete(OrderStatus::Cancelled));
        assert!(!can_delete(OrderStatus::Delivered));
    }

    #[test]
    fn test_unknown_status_is_read_only() {
        assert_eq!(badge_class(OrderStatus::Unknown), "badge");
        assert!(next_statuses(OrderStatus::Unknown).is_empty());
        assert!(!can_delete(OrderStatus::Unknown));
        assert!(!OrderStatus::ALL.contains(&OrderStatus::Unknown));
    }

    #[test]
    fn test_line_row_formats_owned_cells() {
        let o = order(2500.0, &[(1000, 2.5)]);
        let row = LineRow::from(&o.items[0]);
        assert_eq!(row.product, "P0");
        assert_eq!(row.sku, "");
        assert_eq!(row.quantity, "1,000");
        assert_eq!(row.unit_price, "$2.50");
        assert_eq!(row.total, "$2,500.00");
    }
}
