use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::common::deserialize_amount;
use crate::enums::OrderStatus;
use crate::shared::list_view::{Searchable, ServerPage};

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl OrderCustomer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Address snapshot taken when the order was placed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
}

impl ShippingAddress {
    /// Address lines for the detail card, blanks skipped
    pub fn lines(&self) -> Vec<String> {
        let locality = [self.city.as_str(), self.state.as_str(), self.postal_code.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        [self.address.clone(), locality, self.country.clone()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub p_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_logo: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub product_price: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_price: f64,
    #[serde(default)]
    pub product_brand: String,
    #[serde(default)]
    pub product_dimension: String,
    #[serde(default)]
    pub no_of_products: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer_id: OrderCustomer,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: f64,
    pub order_status: OrderStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer_id.full_name(),
            self.customer_id.email.clone(),
            self.order_status.code().to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPagination {
    pub total_orders: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub limit: usize,
}

impl From<OrderPagination> for ServerPage {
    fn from(p: OrderPagination) -> Self {
        ServerPage {
            current_page: p.current_page,
            total_pages: p.total_pages,
            total_count: p.total_orders,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub pagination: OrderPagination,
}

/// `?page=&limit=` of the order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderListParams {
    pub page: usize,
    pub limit: usize,
}

impl OrderListParams {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

// ============================================================================
// Status transitions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Order is {0} and cannot be changed")]
    Terminal(OrderStatus),

    #[error("Cannot move order from {from} to {to}")]
    NotAllowed { from: OrderStatus, to: OrderStatus },
}

/// A validated status change. Only [`Order::propose_transition`] builds one,
/// so every value is a move along the transition graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    order_id: String,
    from: OrderStatus,
    to: OrderStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateQuery<'a> {
    pub order_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdateBody {
    pub order_status: String,
}

impl OrderStatusUpdate {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn from(&self) -> OrderStatus {
        self.from
    }

    pub fn to(&self) -> OrderStatus {
        self.to
    }

    pub fn query(&self) -> StatusUpdateQuery<'_> {
        StatusUpdateQuery {
            order_id: &self.order_id,
        }
    }

    /// The endpoint takes the capitalized status name
    pub fn body(&self) -> StatusUpdateBody {
        StatusUpdateBody {
            order_status: self.to.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl Order {
    /// Targets the status selector may offer
    pub fn available_transitions(&self) -> &'static [OrderStatus] {
        self.order_status.allowed_targets()
    }

    pub fn is_final(&self) -> bool {
        self.order_status.is_terminal()
    }

    /// Build the update request for `target`. No concurrency token is sent;
    /// the last write to reach the server wins.
    pub fn propose_transition(
        &self,
        target: OrderStatus,
    ) -> Result<OrderStatusUpdate, TransitionError> {
        let current = self.order_status;
        if current.is_terminal() {
            return Err(TransitionError::Terminal(current));
        }
        if !current.can_transition_to(target) {
            return Err(TransitionError::NotAllowed {
                from: current,
                to: target,
            });
        }
        Ok(OrderStatusUpdate {
            order_id: self.id.clone(),
            from: current,
            to: target,
        })
    }

    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|i| i.no_of_products).sum()
    }
}

/// Order detail has no endpoint of its own; it is picked out of a list page
pub fn find_order<'a>(orders: &'a [Order], id: &str) -> Option<&'a Order> {
    orders.iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListQuery;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "65f0a1".into(),
            order_id: "ORD-1001".into(),
            customer_id: OrderCustomer {
                id: "c1".into(),
                first_name: "Rhea".into(),
                last_name: "Kapoor".into(),
                email: "rhea@mail.io".into(),
            },
            shipping_address: ShippingAddress::default(),
            order_items: vec![],
            total_amount: 499.0,
            order_status: status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_processing_to_confirmed() {
        let update = order(OrderStatus::Processing)
            .propose_transition(OrderStatus::Confirmed)
            .unwrap();
        assert_eq!(update.order_id(), "65f0a1");
        assert_eq!(update.from(), OrderStatus::Processing);
        assert_eq!(update.to(), OrderStatus::Confirmed);
        assert_eq!(
            serde_json::to_value(update.body()).unwrap(),
            serde_json::json!({ "order_status": "Confirmed" })
        );
        assert_eq!(
            serde_json::to_value(update.query()).unwrap(),
            serde_json::json!({ "order_id": "65f0a1" })
        );
    }

    #[test]
    fn test_processing_to_delivered_rejected() {
        assert_eq!(
            order(OrderStatus::Processing).propose_transition(OrderStatus::Delivered),
            Err(TransitionError::NotAllowed {
                from: OrderStatus::Processing,
                to: OrderStatus::Delivered,
            })
        );
    }

    #[test]
    fn test_terminal_orders_reject_everything() {
        for terminal in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let o = order(terminal);
            assert!(o.is_final());
            assert!(o.available_transitions().is_empty());
            for target in OrderStatus::all() {
                assert_eq!(
                    o.propose_transition(target),
                    Err(TransitionError::Terminal(terminal))
                );
            }
        }
    }

    #[test]
    fn test_offered_targets_are_all_accepted() {
        for status in OrderStatus::all() {
            let o = order(status);
            for target in OrderStatus::all() {
                let offered = o.available_transitions().contains(&target);
                assert_eq!(o.propose_transition(target).is_ok(), offered);
            }
        }
    }

    #[test]
    fn test_concurrent_proposals_both_build() {
        // Two tabs holding the same stale order both get a request; the
        // server applies whichever lands last.
        let stale = order(OrderStatus::Confirmed);
        let a = stale.propose_transition(OrderStatus::Shipping).unwrap();
        let b = stale.propose_transition(OrderStatus::Cancelled).unwrap();
        assert_eq!(a.order_id(), b.order_id());
        assert_ne!(a.body(), b.body());
    }

    #[test]
    fn test_parse_order_list() {
        let raw = r#"{
            "success": true,
            "message": "Orders fetched",
            "orders": [{
                "_id": "o1",
                "order_id": "ORD-7",
                "customer_id": {"_id": "c", "first_name": "Ana", "last_name": "Roy", "email": "ana@x.io"},
                "order_status": "Processing",
                "order_items": [{"p_id": "p", "product_name": "Lamp", "product_price": 20, "total_price": "40", "no_of_products": 2}],
                "shipping_address": {"address": "1 Main St", "city": "Pune", "state": "MH", "postal_code": "411001", "country": "IN"},
                "total_amount": 40,
                "createdAt": "2024-03-01T10:00:00.000Z"
            }],
            "pagination": {"totalOrders": 31, "currentPage": 2, "totalPages": 4, "limit": 10}
        }"#;
        let list: OrderListResponse = serde_json::from_str(raw).unwrap();
        let o = &list.orders[0];
        assert_eq!(o.order_status, OrderStatus::Processing);
        assert_eq!(o.item_count(), 2);
        assert_eq!(o.order_items[0].total_price, 40.0);
        assert_eq!(
            o.shipping_address.lines(),
            vec!["1 Main St", "Pune, MH, 411001", "IN"]
        );

        let page = ListQuery::default().apply_to_server_page(&list.orders, list.pagination.into());
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_count, 31);
    }

    #[test]
    fn test_order_list_with_unrecognised_status() {
        let raw = r#"{
            "orders": [
                {"_id": "o1", "order_status": "Processing", "total_amount": 10},
                {"_id": "o2", "order_status": "Pending", "total_amount": 20}
            ],
            "pagination": {"totalOrders": 2, "currentPage": 1, "totalPages": 1, "limit": 10}
        }"#;
        let list: OrderListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(list.orders.len(), 2);
        assert_eq!(list.orders[0].order_status, OrderStatus::Processing);

        let odd = &list.orders[1];
        assert_eq!(odd.order_status, OrderStatus::Unknown);
        assert!(odd.available_transitions().is_empty());
        assert!(odd.is_final());
        assert_eq!(
            odd.propose_transition(OrderStatus::Confirmed),
            Err(TransitionError::Terminal(OrderStatus::Unknown))
        );
    }

    #[test]
    fn test_find_order() {
        let orders = vec![order(OrderStatus::Processing)];
        assert!(find_order(&orders, "65f0a1").is_some());
        assert!(find_order(&orders, "missing").is_none());
    }

    #[test]
    fn test_search_by_customer_name() {
        let o = order(OrderStatus::Shipping);
        assert!(o.matches_filter("kapoor"));
        assert!(o.matches_filter("ord-10"));
        assert!(!o.matches_filter("zzz"));
    }
}
