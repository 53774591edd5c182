#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate derive_new;

pub mod config;
pub mod declaration;
pub mod error;
pub mod naming;
pub mod render;
pub mod type_hint;
pub mod version;
