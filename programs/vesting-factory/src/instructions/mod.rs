pub mod initialize_factory;
pub mod create_schedule;
pub mod deposit;
pub mod release;
pub mod set_emergency_consent;
pub mod emergency_withdraw;
pub mod set_total_amount;
pub mod set_start_time;
pub mod set_total_intervals;
pub mod set_beneficiary;
pub mod transfer_factory_admin;
pub mod emit_schedule_quote;
pub mod emit_registry_quote;
pub mod emit_beneficiary_quote;

pub use initialize_factory::*;
pub use create_schedule::*;
pub use deposit::*;
pub use release::*;
pub use set_emergency_consent::*;
pub use emergency_withdraw::*;
pub use set_total_amount::*;
pub use set_start_time::*;
pub use set_total_intervals::*;
pub use set_beneficiary::*;
pub use transfer_factory_admin::*;
pub use emit_schedule_quote::*;
pub use emit_registry_quote::*;
pub use emit_beneficiary_quote::*;
