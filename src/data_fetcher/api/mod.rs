pub mod gateway;
pub mod http_client;
pub mod urls;

pub use gateway::{ApiGateway, RawResponse, ReqwestTransport, Transport};
pub use http_client::create_http_client;
pub use urls::*;
