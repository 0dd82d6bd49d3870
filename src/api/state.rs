use crate::aggregator::Aggregator;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Aggregator,
}
