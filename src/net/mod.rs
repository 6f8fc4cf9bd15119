//! Network modules for talking to the clinic REST API.

pub mod api;
