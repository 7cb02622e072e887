use std::sync::Arc;

use askme::FaqRouter;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct HandlerState {
    pub router: Arc<FaqRouter>,
}

impl HandlerState {
    pub fn new(router: FaqRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
