pub mod client;
pub mod parse;

pub use client::AlphaVantageClient;
pub use parse::parse_intraday;
