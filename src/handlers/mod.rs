pub mod auth;
pub mod billing;
pub mod contract;
pub mod order;
pub mod profile;
pub mod realtor;
