pub mod incident;
pub mod message;

pub use incident::{Incident, IncidentNotification};
pub use message::{ChatMessage, Embed, EmbedField};
