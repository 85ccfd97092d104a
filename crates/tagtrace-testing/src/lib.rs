pub mod fixtures;
pub mod logs;

pub use fixtures::TestFixture;
