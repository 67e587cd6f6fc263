// Aggregator for protocol integration tests located in `tests/protocol/`.
// Cargo treats each top-level file in `tests/` as an integration test crate;
// the per-topic files are included as submodules.

#[path = "protocol/command_encode_test.rs"]
mod command_encode_test;

#[path = "protocol/checksum_test.rs"]
mod checksum_test;

#[path = "protocol/response_decode_test.rs"]
mod response_decode_test;
