pub mod audit;
pub mod lambda;

pub use audit::AuditCommand;
pub use lambda::LambdaCommand;
