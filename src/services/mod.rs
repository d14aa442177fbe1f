mod gemini_client_http;
mod store_filesystem;
mod store_memory;
mod store_profile;

pub use gemini_client_http::HttpGeminiClient;
pub use store_filesystem::{FileKeyValueStore, STORE_FILE};
pub use store_memory::MemoryKeyValueStore;
pub use store_profile::ProfileStore;
