pub mod clients;
pub mod flow;
pub mod notifications;
pub mod offline;
pub mod schema;
pub mod team;

pub use clients::ClientCommands;
pub use flow::FlowCommands;
pub use notifications::NotificationCommands;
pub use offline::OfflineCommands;
pub use schema::SchemaCommands;
pub use team::TeamCommands;
