pub mod application {
    pub mod cart {
        pub mod manager;
    }
    pub mod catalog {
        pub mod get_by_id;
        pub mod get_categories;
        pub mod get_products;
    }
    pub mod pull_refresh {
        pub mod handler;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_categories;
            pub mod get_products;
        }
    }
    pub mod pull_refresh {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
}
