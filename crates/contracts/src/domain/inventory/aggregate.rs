use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::deserialize_amount;
use crate::shared::list_view::{Searchable, ServerPage};
use crate::shared::validation::{require, validate_email, ValidationError};

// ============================================================================
// Stock list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_stock: i64,
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub stock_status: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_url: String,
    #[serde(default)]
    pub dimension_name: String,
}

impl InventoryItem {
    pub fn stock_badge_class(&self) -> &'static str {
        match self.stock_status.to_ascii_lowercase().as_str() {
            "in stock" | "in_stock" => "badge badge--success",
            "low stock" | "low_stock" => "badge badge--warning",
            _ => "badge badge--error",
        }
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.product_code.clone(),
            self.stock_status.clone(),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub data: Vec<InventoryItem>,
}

impl InventoryListResponse {
    /// The stock endpoint reports no row total
    pub fn server_page(&self) -> ServerPage {
        ServerPage {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.data.len(),
        }
    }
}

/// `?page=&limit=` of the paged inventory endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

// ============================================================================
// Suppliers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddSupplierRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl AddSupplierRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Supplier name", &self.name)?;
        if !self.email.trim().is_empty() {
            validate_email(&self.email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddSupplierResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub supplier: Option<Supplier>,
}

// ============================================================================
// Purchase bills
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryBill {
    #[serde(rename = "_id")]
    pub id: String,
    pub bill_number: String,
    #[serde(default)]
    pub bill_date: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub items_count: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: f64,
}

impl InventoryBill {
    /// The server formats dates as `date • time`; the list shows the date only
    pub fn date_only(&self) -> &str {
        self.bill_date
            .split(" • ")
            .next()
            .unwrap_or(&self.bill_date)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryBillListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_bills: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub data: Vec<InventoryBill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillIdQuery<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetailItem {
    pub product: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price: f64,
    #[serde(default)]
    pub qty: u32,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetail {
    pub bill_number: String,
    #[serde(default)]
    pub bill_date: String,
    #[serde(default)]
    pub items: Vec<BillDetailItem>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub grand_total: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillDetailResponse {
    #[serde(default)]
    pub success: bool,
    pub data: BillDetail,
}

// ============================================================================
// Bill draft
// ============================================================================

/// One line of the purchase bill being edited
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: Uuid,
    pub product_id: String,
    pub unit_id: String,
    pub supplier_id: String,
    pub quantity: u32,
    pub price: f64,
}

impl BillRow {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: String::new(),
            unit_id: String::new(),
            supplier_id: String::new(),
            quantity: 1,
            price: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    pub fn is_complete(&self) -> bool {
        !self.product_id.is_empty()
            && !self.supplier_id.is_empty()
            && self.quantity > 0
            && self.price > 0.0
    }
}

impl Default for BillRow {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillLine {
    pub inventory_id: String,
    pub supplier_id: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddBillRequest {
    pub bill_date: String,
    pub items: Vec<BillLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBillResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub bill_number: Option<String>,
}

/// Purchase bill assembled in the browser before submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    rows: Vec<BillRow>,
}

impl BillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[BillRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) -> Uuid {
        let row = BillRow::new();
        let id = row.id;
        self.rows.push(row);
        id
    }

    pub fn remove_row(&mut self, id: Uuid) {
        self.rows.retain(|r| r.id != id);
    }

    /// Apply `edit` to the row with `id`, if it is still in the draft
    pub fn update_row(&mut self, id: Uuid, edit: impl FnOnce(&mut BillRow)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            edit(row);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(BillRow::total).sum()
    }

    pub fn can_submit(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(BillRow::is_complete)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rows.is_empty() {
            return Err(ValidationError::Invalid(
                "Add at least one item to the bill".into(),
            ));
        }
        if let Some(pos) = self.rows.iter().position(|r| !r.is_complete()) {
            return Err(ValidationError::Invalid(format!(
                "Row {} needs a product, a supplier, a quantity and a price",
                pos + 1
            )));
        }
        Ok(())
    }

    pub fn to_request(&self, bill_date: DateTime<Utc>) -> Result<AddBillRequest, ValidationError> {
        self.validate()?;
        Ok(AddBillRequest {
            bill_date: bill_date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            items: self
                .rows
                .iter()
                .map(|r| BillLine {
                    inventory_id: r.product_id.clone(),
                    supplier_id: r.supplier_id.clone(),
                    quantity: r.quantity,
                    unit_price: r.price,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled(draft: &mut BillDraft, qty: u32, price: f64) -> Uuid {
        let id = draft.add_row();
        draft.update_row(id, |r| {
            r.product_id = "inv-1".into();
            r.supplier_id = "sup-1".into();
            r.unit_id = "kg".into();
            r.quantity = qty;
            r.price = price;
        });
        id
    }

    #[test]
    fn test_grand_total() {
        let mut draft = BillDraft::new();
        filled(&mut draft, 2, 10.0);
        filled(&mut draft, 3, 1.5);
        assert_eq!(draft.grand_total(), 24.5);
        assert!(draft.can_submit());
    }

    #[test]
    fn test_incomplete_rows_block_submit() {
        let mut draft = BillDraft::new();
        assert!(!draft.can_submit());
        assert!(draft.validate().is_err());

        filled(&mut draft, 1, 5.0);
        let blank = draft.add_row();
        assert!(!draft.can_submit());
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Invalid(
                "Row 2 needs a product, a supplier, a quantity and a price".into()
            ))
        );

        draft.remove_row(blank);
        assert!(draft.can_submit());

        let zero_price = filled(&mut draft, 1, 0.0);
        assert!(!draft.can_submit());
        draft.update_row(zero_price, |r| r.price = 2.0);
        assert!(draft.can_submit());
    }

    #[test]
    fn test_request_payload() {
        let mut draft = BillDraft::new();
        filled(&mut draft, 4, 2.5);
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let body = serde_json::to_value(draft.to_request(date).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "bill_date": "2024-05-01T09:30:00.000Z",
                "items": [{
                    "inventory_id": "inv-1",
                    "supplier_id": "sup-1",
                    "quantity": 4,
                    "unit_price": 2.5
                }]
            })
        );
    }

    #[test]
    fn test_parse_bills() {
        let raw = r#"{"success":true,"totalBills":12,"totalPages":2,"currentPage":1,"data":[
            {"_id":"b1","bill_number":"BILL-0001","bill_date":"01 May 2024 • 09:30","items_count":"3","total_amount":"1,250.00"}
        ]}"#;
        let list: InventoryBillListResponse = serde_json::from_str(raw).unwrap();
        let bill = &list.data[0];
        assert_eq!(bill.date_only(), "01 May 2024");
        assert_eq!(bill.items_count, 3.0);
        assert_eq!(bill.total_amount, 1250.0);
    }

    #[test]
    fn test_supplier_email_optional() {
        let mut req = AddSupplierRequest {
            name: "Metro Supplies".into(),
            ..AddSupplierRequest::default()
        };
        assert!(req.validate().is_ok());
        req.email = "not-an-email".into();
        assert_eq!(req.validate(), Err(ValidationError::InvalidEmail));
    }
}
