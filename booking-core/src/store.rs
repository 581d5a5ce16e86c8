use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::repository::TicketRepository;
use crate::ticket::Ticket;
use crate::{TicketError, TicketResult};

/// Process-local ticket store. A single lock around the whole sequence keeps
/// each operation atomic even though axum runs handlers concurrently.
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketStore {
    async fn list(&self) -> Vec<Ticket> {
        self.tickets.read().await.clone()
    }

    async fn create(&self, ticket: Ticket) -> Ticket {
        let mut tickets = self.tickets.write().await;
        tickets.push(ticket.clone());
        debug!(id = ticket.id, total = tickets.len(), "ticket created");
        ticket
    }

    async fn update(&self, id: i64, ticket: Ticket) -> TicketResult<Ticket> {
        let mut tickets = self.tickets.write().await;
        // First match only; duplicate ids are allowed on create.
        match tickets.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = ticket.clone();
                debug!(id, "ticket updated");
                Ok(ticket)
            }
            None => Err(TicketError::NotFound(id)),
        }
    }

    async fn remove(&self, id: i64) -> TicketResult<Ticket> {
        let mut tickets = self.tickets.write().await;
        match tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = tickets.remove(index);
                debug!(id, total = tickets.len(), "ticket deleted");
                Ok(removed)
            }
            None => Err(TicketError::NotFound(id)),
        }
    }
}
