pub mod api;
pub mod context;
pub mod guard;
pub mod policy;
pub mod storage;
