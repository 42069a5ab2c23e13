pub mod shared {
    pub mod infrastructure {
        pub mod links;
    }
}

pub mod modules {
    pub mod camps {
        pub mod core {
            pub mod camp;
            pub mod errors;
            pub mod outcome;
            pub mod repository;
            pub mod speaker;
            pub mod talk;
        }
        pub mod use_cases {
            pub mod manage_camps {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_talks {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod problem;
                pub mod representations;
                pub mod versioning;
            }
            pub mod outbound {
                pub mod in_memory_store;
                pub mod seed;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod camp_lifecycle_tests;
    }
}
