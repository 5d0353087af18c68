pub mod health;
pub mod subject;
