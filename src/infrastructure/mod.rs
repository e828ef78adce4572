pub mod http;
pub mod markup;
pub mod notify;
pub mod storage;
