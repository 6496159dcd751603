//! `Describe` rejects tuple structs.

use envconfig_validator::Describe;

#[derive(Describe)]
struct Port(pub u16);

fn main() {}
