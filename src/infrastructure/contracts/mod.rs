mod service;

pub use service::ContractService;
