pub mod constants;
pub mod params;

pub use params::{select_params, Params};
