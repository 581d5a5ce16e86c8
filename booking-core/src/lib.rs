pub mod repository;
pub mod store;
pub mod ticket;

pub use repository::TicketRepository;
pub use store::InMemoryTicketStore;
pub use ticket::Ticket;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("no ticket with id {0}")]
    NotFound(i64),
}

pub type TicketResult<T> = Result<T, TicketError>;
