use serde::Serialize;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        PersonId(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        PersonId(value)
    }
}

// Values
pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_HTTP_WORKERS: usize = 2;
