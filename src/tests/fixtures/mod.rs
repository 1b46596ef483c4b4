pub mod events;
pub mod http_stub;
pub mod outbound;
pub mod state;
