pub mod auth;
pub mod clients;
pub mod dispatch;
pub mod flow;
pub mod health;
pub mod navigate;
pub mod notifications;
pub mod offline;
pub mod schema;
pub mod shared;
pub mod smoke;
pub mod team;
