mod http;

pub use http::HttpContractSource;
