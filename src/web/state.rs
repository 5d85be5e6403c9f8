use std::sync::Arc;

use crate::reply::ReplyService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReplyService>,
}

impl AppState {
    pub fn new(service: Arc<ReplyService>) -> Self {
        Self { service }
    }
}
