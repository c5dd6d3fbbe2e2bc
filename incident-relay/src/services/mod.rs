pub mod transform;
pub mod webhook;

pub use transform::to_chat_message;
pub use webhook::{DeliveryError, HttpWebhookSender, WebhookSender};
