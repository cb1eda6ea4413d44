//! Fixture shapes and end-to-end mapping tests, driven through the
//! `shapemap` facade exactly as a downstream crate would use it.

pub mod fixtures;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use shapemap::prelude::*;
}
