use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Order lifecycle status.
///
/// The transition graph is fixed:
///
/// ```text
/// processing -> confirmed -> shipping -> delivered
///      \             \           \
///       `-> cancelled `-> cancelled `-> cancelled
/// ```
///
/// `delivered` and `cancelled` are terminal. A status string the client
/// does not recognise decodes to `Unknown`, which offers no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processing,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
    Unknown,
}

impl OrderStatus {
    /// Lowercase code used in the order model and in the UI
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Capitalized name. The status-update endpoint expects this form.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Known statuses, in lifecycle order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Processing,
            OrderStatus::Confirmed,
            OrderStatus::Shipping,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// Parse a status code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "processing" => Some(OrderStatus::Processing),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipping" => Some(OrderStatus::Shipping),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Statuses reachable in one step. Exhaustive, no wildcard arm.
    pub fn allowed_targets(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Processing => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Shipping, OrderStatus::Cancelled],
            OrderStatus::Shipping => &[OrderStatus::Delivered, OrderStatus::Cancelled],
            OrderStatus::Delivered => &[],
            OrderStatus::Cancelled => &[],
            OrderStatus::Unknown => &[],
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_targets().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_targets().is_empty()
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "badge badge--info",
            OrderStatus::Confirmed => "badge badge--success",
            OrderStatus::Shipping => "badge badge--accent",
            OrderStatus::Delivered => "badge badge--success-strong",
            OrderStatus::Cancelled => "badge badge--error",
            OrderStatus::Unknown => "badge",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::from_code(&raw).unwrap_or(OrderStatus::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert_eq!(Processing.allowed_targets(), &[Confirmed, Cancelled]);
        assert_eq!(Confirmed.allowed_targets(), &[Shipping, Cancelled]);
        assert_eq!(Shipping.allowed_targets(), &[Delivered, Cancelled]);
        assert!(Delivered.allowed_targets().is_empty());
        assert!(Cancelled.allowed_targets().is_empty());
    }

    #[test]
    fn test_only_listed_targets_are_allowed() {
        for from in OrderStatus::all() {
            for to in OrderStatus::all() {
                assert_eq!(
                    from.can_transition_to(to),
                    from.allowed_targets().contains(&to),
                    "{from} -> {to}"
                );
            }
            assert!(!from.can_transition_to(from), "self loop on {from}");
        }
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = OrderStatus::all()
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![OrderStatus::Delivered, OrderStatus::Cancelled]);
    }

    #[test]
    fn test_deserialize_ignores_case() {
        let s: OrderStatus = serde_json::from_str("\"Processing\"").unwrap();
        assert_eq!(s, OrderStatus::Processing);
        let s: OrderStatus = serde_json::from_str("\"shipping\"").unwrap();
        assert_eq!(s, OrderStatus::Shipping);
    }

    #[test]
    fn test_unrecognised_status_decodes_to_unknown() {
        let s: OrderStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(s, OrderStatus::Unknown);
        assert!(s.allowed_targets().is_empty());
        assert!(s.is_terminal());
        assert!(!OrderStatus::all().contains(&OrderStatus::Unknown));
        assert_eq!(OrderStatus::from_code("returned"), None);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
