pub mod service;
pub mod types;

pub use service::ReplyService;
pub use types::{Reply, ReplyRequest};
