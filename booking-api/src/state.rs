use std::sync::Arc;

use booking_core::TicketRepository;

#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn TicketRepository>,
}

impl AppState {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }
}
