pub(crate) mod health;
pub mod items;

pub use health::health_check;
