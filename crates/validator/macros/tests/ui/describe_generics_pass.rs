//! Generic structs pick up `Reflect` bounds for their public fields.

use envconfig_validator::{Describe, validate};

#[derive(Describe)]
pub struct Wrapper<T> {
    #[validate(required)]
    pub inner: T,

    hidden: Option<T>,
}

#[derive(Describe)]
pub struct Borrowed<'a> {
    #[validate(required, max = 16)]
    pub name: &'a str,
}

fn main() {
    let wrapper = Wrapper {
        inner: String::from("value"),
        hidden: None,
    };
    let _ = validate(&wrapper);

    let borrowed = Borrowed { name: "short" };
    let _ = validate(&borrowed);
}
