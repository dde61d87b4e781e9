// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ClassificationResult, ClassificationScores, FollowUpStatus};
pub use requests::TicketPayload;
pub use responses::{UnauthorizedResponse, WebhookErrorResponse, WebhookResponse};
