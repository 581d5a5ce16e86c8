use async_trait::async_trait;

use crate::ticket::Ticket;
use crate::TicketResult;

/// Repository trait for ticket data access. The HTTP layer only ever talks
/// to this trait; `InMemoryTicketStore` is the sole implementation today.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// All tickets in insertion order.
    async fn list(&self) -> Vec<Ticket>;

    /// Appends unconditionally (no duplicate-id check) and echoes the ticket.
    async fn create(&self, ticket: Ticket) -> Ticket;

    /// Overwrites the first ticket whose id matches, keeping its position.
    async fn update(&self, id: i64, ticket: Ticket) -> TicketResult<Ticket>;

    /// Removes the first ticket whose id matches and returns its old values.
    async fn remove(&self, id: i64) -> TicketResult<Ticket>;
}
