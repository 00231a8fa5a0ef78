pub mod application {
    pub mod auth {
        pub mod session;
    }
    pub mod detection {
        pub mod scan;
    }
}

pub mod domain {
    pub mod logger;
    pub mod auth {
        pub mod continuation;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
    }
    pub mod capability {
        pub mod errors;
        pub mod factory;
    }
    pub mod detection {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod capability;
        pub mod value_objects;
    }
}
