pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod classify;
mod config;
mod exposed_headers;
mod filter;
mod header_builder;
mod headers;
mod origin;
mod request;
mod result;
mod util;
mod write;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use classify::{Classification, classify};
pub use config::FilterConfig;
pub use exposed_headers::ExposedHeaders;
pub use filter::CorsFilter;
pub use headers::Headers;
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use request::RequestContext;
pub use result::{CorsOutcome, FilterDecision};
pub use write::{HeaderSink, apply_headers};
