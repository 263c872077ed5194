pub mod complaint_store;
pub use complaint_store::ComplaintStore;
