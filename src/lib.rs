pub mod config;
pub mod domain {
    pub mod order;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod admin;
        pub mod orders;
    }
}
pub mod providers;
pub mod repo {
    pub mod orders_repo;
}
pub mod service {
    pub mod order_service;
}

#[derive(Clone)]
pub struct AppState {
    pub order_service: service::order_service::OrderService,
    pub orders_repo: repo::orders_repo::OrdersRepo,
}
