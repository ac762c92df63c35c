pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod projector;
            pub mod schema;
            pub mod snapshot_policy;
            pub mod state;
        }
        pub mod use_cases {
            pub mod commands;
            pub mod decide;
            pub mod decision;
            pub mod handler;
            pub mod create_employee {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_leave {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
        }
    }
}

pub mod shell;
