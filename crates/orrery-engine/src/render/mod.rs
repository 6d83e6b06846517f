pub mod instance;
#[cfg(feature = "vectors")]
pub mod vector;
