pub mod association_picker;
pub mod banner;
pub mod carousel;
pub mod countdown;
pub mod page;

pub use page::PromotionsPage;
