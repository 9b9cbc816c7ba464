pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod timecards {
        pub mod core {
            pub mod command;
            pub mod decide;
            pub mod errors;
            pub mod line;
            pub mod status;
            pub mod timecard;
            pub mod transition;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod manage_timecards {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_lines {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transition_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod timecard_store;
                pub mod timecard_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod timecard_lifecycle_tests;
    }
}
