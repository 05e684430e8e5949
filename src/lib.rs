pub mod checkout;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod guard;
pub mod models;
pub mod response;
pub mod search;
pub mod services;
pub mod state;
pub mod stores;
pub mod validation;
