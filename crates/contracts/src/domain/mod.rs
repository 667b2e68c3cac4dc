pub mod brand;
pub mod category;
pub mod common;
pub mod inventory;
pub mod order;
pub mod product;
pub mod promotion;
pub mod subcategory;
