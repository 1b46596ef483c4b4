use std::sync::Arc;

use crate::modules::events::adapters::outbound::reply_generator::DisabledReplyGenerator;
use crate::modules::events::use_cases::receive_event::handler::ReceiveEventHandler;
use crate::shared::infrastructure::store::Store;
use crate::shell::state::AppState;
use crate::tests::fixtures::outbound::StubReplyGenerator;

pub fn make_test_state() -> AppState {
    let store = Arc::new(Store::default());
    let handler = ReceiveEventHandler::new(store.clone(), Arc::new(DisabledReplyGenerator));
    AppState::new(store, handler)
}

pub fn make_test_state_with_replies(reply: &str) -> AppState {
    let store = Arc::new(Store::default());
    let handler = ReceiveEventHandler::new(store.clone(), Arc::new(StubReplyGenerator::new(reply)));
    AppState::new(store, handler)
}
