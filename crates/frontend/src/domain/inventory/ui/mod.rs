mod bill_detail;
mod bill_editor;
mod page;
mod recent_bills;
mod stock_list;
mod suppliers_dialog;
mod units_dialog;

pub use page::InventoryPage;
