pub mod chat;
pub mod reservation;

pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use reservation::{Reservation, ReservationCreate};
