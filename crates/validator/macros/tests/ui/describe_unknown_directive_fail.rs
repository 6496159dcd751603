//! Unknown `#[validate(...)]` keys are rejected.

use envconfig_validator::Describe;

#[derive(Describe)]
struct Config {
    #[validate(email)]
    pub host: String,
}

fn main() {}
