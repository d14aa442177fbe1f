mod generation_client;
mod key_value_store;

pub use generation_client::{GenerationClient, GenerationRequest};
pub use key_value_store::KeyValueStore;
