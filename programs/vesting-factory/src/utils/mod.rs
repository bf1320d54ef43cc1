pub mod validate;
pub mod accrual;
