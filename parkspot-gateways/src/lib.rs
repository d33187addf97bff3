pub mod geolocation;
pub mod navigation;
pub mod session;
pub mod subscription;

mod http;
