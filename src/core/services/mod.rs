pub mod budget_query_service;

pub use budget_query_service::BudgetQueryEngine;
