//! Plan inputs for SIP projections

mod data;

pub use data::SipPlan;
