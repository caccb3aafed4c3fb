//! Shared fixtures for hearth-engine unit tests.
