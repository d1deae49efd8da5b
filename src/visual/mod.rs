mod fare_app;
mod record_table;

pub use fare_app::{FareApp, run_app};
