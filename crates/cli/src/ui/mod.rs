pub mod app;
pub mod primitives;
pub mod router;
pub mod screens;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
pub use router::Tab;
