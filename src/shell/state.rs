use std::sync::Arc;

use crate::modules::events::adapters::outbound::forwarder::HttpEventForwarder;
use crate::modules::events::adapters::outbound::openai_reply_generator::OpenAiReplyGenerator;
use crate::modules::events::adapters::outbound::reply_generator::{
    DisabledReplyGenerator, ReplyGenerator,
};
use crate::modules::events::use_cases::receive_event::handler::ReceiveEventHandler;
use crate::shared::infrastructure::store::Store;
use crate::shell::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub receive_handler: Arc<ReceiveEventHandler>,
}

impl AppState {
    pub fn new(store: Arc<Store>, receive_handler: ReceiveEventHandler) -> Self {
        Self {
            store,
            receive_handler: Arc::new(receive_handler),
        }
    }

    /// Wires one store, created here, into every handler.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let store = Arc::new(Store::new(settings.store));

        let replies: Arc<dyn ReplyGenerator> = match &settings.openai_api_key {
            Some(api_key) => {
                let generator =
                    OpenAiReplyGenerator::new(api_key.clone(), settings.openai_model.clone())?;
                tracing::info!(model = %generator.model(), "reply generation enabled");
                Arc::new(generator)
            }
            None => Arc::new(DisabledReplyGenerator),
        };

        let mut receive_handler = ReceiveEventHandler::new(store.clone(), replies);
        if let Some(url) = &settings.forward_url {
            let forwarder = HttpEventForwarder::new(url.clone())?;
            tracing::info!(url = %forwarder.url(), "event forwarding enabled");
            receive_handler = receive_handler.with_forwarder(Arc::new(forwarder));
        }

        Ok(Self::new(store, receive_handler))
    }
}
