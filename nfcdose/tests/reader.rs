// Aggregator for reading-session integration tests in `tests/reader/`.

#[path = "reader/device_memory_test.rs"]
mod device_memory_test;

#[path = "reader/nfc_memory_test.rs"]
mod nfc_memory_test;

#[path = "reader/poller_test.rs"]
mod poller_test;

#[path = "reader/dosage_test.rs"]
mod dosage_test;
