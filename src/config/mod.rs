//! Engine configuration.
//!
//! [`EngineConfig`] is a plain validated value: build it with
//! [`EngineConfig::new`] or [`Default`] plus `with_*` setters, or
//! deserialize it with `serde` from whatever format the embedding service
//! uses, then hand it to [`PoolRegistry::new`](crate::registry::PoolRegistry::new).

mod engine_config;

pub use engine_config::{
    EngineConfig, DEFAULT_CONSTANT_PRODUCT_FEE, DEFAULT_LOCK_TIMEOUT, DEFAULT_STABLE_SWAP_FEE,
};
