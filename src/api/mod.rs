mod client;

pub use client::{ApiClient, HttpBackend, HttpResponse, ReqwestBackend};
