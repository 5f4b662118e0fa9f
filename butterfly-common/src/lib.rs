//! Shared error taxonomy and request configuration for butterfly-osm routing crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        let _result = 2 + 2;
        assert_eq!(_result, 4);
    }
}
