//! サーバーAPI

pub mod client;
