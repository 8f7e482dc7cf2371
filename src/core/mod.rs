// Core modules implementing the value model, its serde bridge, and error modeling.
pub mod error;
mod impls;
pub mod value;
