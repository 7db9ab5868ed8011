pub mod serde_date;
