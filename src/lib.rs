// Crate entry point. Declares modules so the binary and the tests can reach them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod event;
        pub mod turn;
    }
    pub mod infrastructure {
        pub mod store;
    }
}

pub mod modules {
    pub mod events {
        pub mod adapters {
            pub mod outbound {
                pub mod forwarder;
                pub mod openai_reply_generator;
                pub mod reply_generator;
            }
        }
        pub mod use_cases {
            pub mod receive_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_status {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod sessions {
        pub mod use_cases {
            pub mod get_session_history {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod clear_session {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod context {
        pub mod use_cases {
            pub mod read_context {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod write_context {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_context {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
