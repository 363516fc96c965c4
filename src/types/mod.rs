mod field_value;
#[cfg(test)]
mod tests;

pub use field_value::{lenient_text, FieldValue};
