//! Field names fall back to the serde rename the config is decoded from.

use envconfig_validator::{ConfigError, Describe, validate};
use serde::Deserialize;

#[derive(Deserialize, Describe)]
pub struct DatabaseConfig {
    #[serde(rename = "DB_HOST")]
    #[validate(required)]
    pub host: String,

    #[serde(rename(serialize = "port_out", deserialize = "DB_PORT"))]
    #[validate(required)]
    pub port: String,

    #[serde(default, rename = "user")]
    #[validate(required, alias = "db_user")]
    pub username: String,
}

fn main() {
    let config = DatabaseConfig {
        host: String::new(),
        port: String::new(),
        username: String::new(),
    };

    let names: Vec<String> = config
        .fields()
        .iter()
        .map(|field| field.name().into_owned())
        .collect();
    assert_eq!(names, ["DB_HOST", "DB_PORT", "db_user"]);

    let Err(ConfigError::Invalid(errors)) = validate(&config) else {
        panic!("expected field violations");
    };
    let fields: Vec<&str> = errors.iter().map(|e| &*e.field).collect();
    assert_eq!(fields, ["DB_HOST", "DB_PORT", "db_user"]);
}
