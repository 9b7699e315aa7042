use shared::model::{ContactRequest, ContactResponse, MessageDto, MessagesResponse};
use shared::utils::API_PREFIX;
use crate::error::Error;
use crate::services::{request_get, request_post};

pub struct MessageService {
    message_path: String,
    contact_path: String,
}

impl MessageService {
    pub fn new() -> Self {
        Self {
            message_path: format!("{API_PREFIX}/messages"),
            contact_path: format!("{API_PREFIX}/contact"),
        }
    }

    pub async fn list(&self) -> Result<Vec<MessageDto>, Error> {
        let response: MessagesResponse = request_get(&self.message_path).await?;
        Ok(response.messages)
    }

    /// Sends the public contact form, returns the stored message id.
    pub async fn contact(&self, request: ContactRequest) -> Result<u64, Error> {
        let response: ContactResponse = request_post(&self.contact_path, request).await?;
        Ok(response.id)
    }
}
