pub mod create;
mod dispatch;
pub mod inspect;
pub mod plan;

pub use dispatch::dispatch;
