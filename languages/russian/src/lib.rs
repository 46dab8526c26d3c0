pub mod client;

pub use client::OpenRussianClient;
