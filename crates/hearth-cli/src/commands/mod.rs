pub mod check;
pub mod dispatch;
pub mod plan;
pub mod rota;
pub mod schema;
pub mod shared;
pub mod status;
