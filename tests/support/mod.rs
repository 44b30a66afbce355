// tests/support/mod.rs
// Shared by multiple integration test binaries; not every binary uses
// every symbol, so silence the resulting dead_code warnings here.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;

#[allow(unused_imports)]
pub use mocks::*;
