//! Tests for the Describe derive macro - successful cases.

use envconfig_validator::{Describe, StructValidator, Validator, validate};

/// Nested database settings.
#[derive(Describe)]
pub struct DatabaseConfig {
    #[validate(required, pattern = "alphanumeric")]
    pub name: String,

    #[validate(min = 8, max = "64")]
    pub password: String,

    #[validate(required = false)]
    pub port: u16,
}

/// Top-level settings mixing every supported field form.
#[derive(Describe)]
pub struct AppConfig {
    #[validate(required, alias = "listen_host")]
    pub host: String,

    #[validate(required)]
    pub database: DatabaseConfig,

    #[validate(required)]
    pub replica: Option<DatabaseConfig>,

    #[validate(required)]
    pub tags: Vec<String>,

    #[validate(required)]
    pub labels: std::collections::HashMap<String, String>,

    #[validate(min = -1)]
    pub r#type: String,

    #[validate(required)]
    scratch: NotReflected,
}

/// Private fields need no `Reflect` impl.
pub struct NotReflected;

/// Unit structs describe no fields.
#[derive(Describe)]
pub struct Marker;

fn main() {
    let config = AppConfig {
        host: "localhost".to_owned(),
        database: DatabaseConfig {
            name: "main".to_owned(),
            password: "correct-horse".to_owned(),
            port: 5432,
        },
        replica: None,
        tags: vec!["a".to_owned()],
        labels: std::collections::HashMap::new(),
        r#type: String::new(),
        scratch: NotReflected,
    };

    let _ = config.fields();
    let _ = validate(&config);
    let _ = validate(&Marker);
    let _ = StructValidator::new().validate_struct(Some(&&config));
}
