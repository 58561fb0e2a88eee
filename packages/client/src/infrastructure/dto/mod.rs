//! Wire-format DTOs.

pub mod http;
