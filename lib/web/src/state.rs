use crate::describe::DescribeSource;
use lod_conneg::NegotiationDispatcher;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<NegotiationDispatcher>,
    pub describe: Arc<dyn DescribeSource>,
}
