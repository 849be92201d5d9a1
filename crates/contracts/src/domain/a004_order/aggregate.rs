use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const ORDERS_PATH: &str = "/orders";

/// Decoded case-insensitively. A value the admin does not know becomes
/// `Unknown` so one odd row cannot fail a whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire value, also used as the `status` form field and query filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    /// Delivered and cancelled orders no longer change status.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::parse(&raw).unwrap_or(OrderStatus::Unknown))
    }
}

/// Customer order with its lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    pub status: OrderStatus,
    pub total_price: f64,
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the line totals. Display only: `total_price` from the server
    /// is authoritative (it already includes discounts).
    pub fn lines_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub product_item_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Form payload for `PATCH /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusDto {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, unit_price: f64) -> OrderItem {
        OrderItem {
            id: 1,
            product_item_id: 1,
            product_name: "Tee".into(),
            sku: None,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("lost"), None);
        assert_eq!(OrderStatus::parse("unknown"), None);
    }

    #[test]
    fn test_status_deserializes_any_case() {
        let status: OrderStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, OrderStatus::Pending);
        let status: OrderStatus = serde_json::from_str(r#""SHIPPED""#).unwrap();
        assert_eq!(status, OrderStatus::Shipped);
    }

    #[test]
    fn test_page_with_unexpected_status_still_decodes() {
        let raw = r#"[
            {"id": 1, "userId": "u1", "customerName": "Ann", "status": "Pending",
             "totalPrice": 10.0, "createdAt": "2024-03-15T10:00:00Z"},
            {"id": 2, "userId": "u2", "customerName": "Bob", "status": "Refunded",
             "totalPrice": 20.0, "createdAt": "2024-03-16T10:00:00Z"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(raw).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].status, OrderStatus::Unknown);
        assert_eq!(serde_json::to_string(&orders[1].status).unwrap(), r#""Unknown""#);
    }

    #[test]
    fn test_lines_total_and_count() {
        let order = Order {
            id: 1,
            user_id: "u1".into(),
            customer_name: "Ann".into(),
            email: None,
            phone: None,
            shipping_address: None,
            status: OrderStatus::Pending,
            total_price: 45.0,
            created_at: "2024-03-15T10:00:00Z".into(),
            items: vec![item(2, 10.0), item(1, 25.0)],
        };
        assert_eq!(order.lines_total(), 45.0);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&OrderStatusDto { status: OrderStatus::Delivered }).unwrap();
        assert_eq!(json, r#"{"status":"Delivered"}"#);
    }
}
