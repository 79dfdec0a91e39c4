pub mod client;
pub mod request_builder;
pub mod response_converter;

pub use client::{transport_category, DefaultProber, HttpProber};
pub use request_builder::{build_client, build_probe_url, KEY_PARAM};
pub use response_converter::ResponseConverterImpl;
