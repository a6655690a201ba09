pub mod catalog;
pub mod deserialize;
pub mod document;
pub mod error;
pub mod factory;
pub mod request;
pub mod serialize;
pub mod validate;
pub mod wasm;
pub mod wire;
