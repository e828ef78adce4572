pub mod aggregate;
pub mod check_latest;
pub mod fetch_result;
pub mod probe;
pub mod report;
