//! A directive may appear only once per field.

use envconfig_validator::Describe;

#[derive(Describe)]
struct Config {
    #[validate(min = 1, min = 2)]
    pub host: String,
}

fn main() {}
