pub mod balance_service;
pub mod operation_service;
pub mod statement_service;

pub use balance_service::BalanceService;
pub use operation_service::OperationService;
pub use statement_service::{StatementRetrieval, StatementService, STATEMENT_WINDOW_DAYS};
