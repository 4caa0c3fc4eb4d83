/// Dummy context for tests.
pub mod dummyctx;
/// Harness for scene testing.
pub mod harness;
