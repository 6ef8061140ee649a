//! Transport implementations - reqwest and a scripted in-memory stub.

mod stub;

#[cfg(feature = "http")]
mod http;

pub use stub::StubTransport;

#[cfg(feature = "http")]
pub use http::ReqwestTransport;
