//! Product records and validated product input.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! Input and output are separate types: a [`ProductDraft`] is a validated set of
//! fields, and [`Product::from_draft`] turns it into a stored record once an ID exists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt::Display;
use std::num::IntErrorKind;

use super::validation::ValidationErrors;

/// Longest accepted product name, counted in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u64,
}

impl Product {
    /// Builds the record for `id` from validated fields.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        }
    }

    /// Overwrites every field except the ID.
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.quantity = draft.quantity;
    }
}

/// Validated product fields, used for both creation and full replacement.
///
/// Can only be obtained through [`ProductDraft::new`] or [`ProductDraft::from_json`],
/// so holding one means the name length, price and quantity bounds were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: f64,
    quantity: u64,
}

impl ProductDraft {
    /// Validates already-typed fields.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Result<Self, ValidationErrors> {
        let name = name.into();
        let mut errors = ValidationErrors::default();
        check_name(&name, &mut errors);
        check_price(price, &mut errors);
        let quantity = check_quantity(quantity, &mut errors);
        errors.into_result(|| Self {
            name,
            price,
            quantity,
        })
    }

    /// Validates a raw JSON request body.
    ///
    /// Every field is checked and all problems are reported together. Numeric strings
    /// (`"9.99"`, `"10"`) are read as numbers. Missing fields, other JSON types,
    /// fractional quantities and out-of-range values are rejected.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = body.as_object() else {
            return Err(ValidationErrors::single("body", "expected a JSON object"));
        };
        let mut errors = ValidationErrors::default();

        let name = match object.get("name") {
            None => {
                errors.push("name", "field required");
                None
            }
            Some(Value::String(name)) => {
                check_name(name, &mut errors);
                Some(name.clone())
            }
            Some(_) => {
                errors.push("name", "must be a string");
                None
            }
        };

        let price = match object.get("price") {
            None => {
                errors.push("price", "field required");
                None
            }
            Some(value) => match json_price(value) {
                Some(p) => {
                    check_price(p, &mut errors);
                    Some(p)
                }
                None => {
                    errors.push("price", "must be a number");
                    None
                }
            },
        };

        let quantity = match object.get("quantity") {
            None => {
                errors.push("quantity", "field required");
                None
            }
            Some(value) => match json_integer(value) {
                Ok(q) => Some(check_quantity(q, &mut errors)),
                Err(message) => {
                    errors.push("quantity", message);
                    None
                }
            },
        };

        match (name, price, quantity) {
            (Some(name), Some(price), Some(quantity)) if errors.is_empty() => Ok(Self {
                name,
                price,
                quantity,
            }),
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    let chars = name.chars().count();
    if chars == 0 {
        errors.push("name", "must be at least 1 character");
    } else if chars > NAME_MAX_CHARS {
        errors.push(
            "name",
            format!("must be at most {NAME_MAX_CHARS} characters"),
        );
    }
}

fn check_price(price: f64, errors: &mut ValidationErrors) {
    if !price.is_finite() {
        errors.push("price", "must be a finite number");
    } else if price < 0.0 {
        errors.push("price", "must be greater than or equal to 0");
    }
}

fn check_quantity(quantity: i64, errors: &mut ValidationErrors) -> u64 {
    u64::try_from(quantity).unwrap_or_else(|_| {
        errors.push("quantity", "must be greater than or equal to 0");
        0
    })
}

fn too_large() -> String {
    format!("must be at most {}", i64::MAX)
}

/// Reads a JSON number, or a string holding one.
fn json_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Reads a JSON integer, or a string holding one. Floats with no fractional part
/// (`10.0`) count. Anything outside the `i64` range is reported as too large or negative.
fn json_integer(value: &Value) -> Result<i64, String> {
    let n = match value {
        Value::Number(n) => n,
        Value::String(s) => {
            return s.trim().parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => too_large(),
                IntErrorKind::NegOverflow => "must be greater than or equal to 0".to_string(),
                _ => "must be an integer".to_string(),
            })
        }
        _ => return Err("must be an integer".to_string()),
    };
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        return Err(too_large());
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => {
            if f >= i64::MAX as f64 {
                Err(too_large())
            } else if f < i64::MIN as f64 {
                Err("must be greater than or equal to 0".to_string())
            } else {
                Ok(f as i64)
            }
        }
        _ => Err("must be an integer".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &ValidationErrors) -> Vec<&str> {
        errors.fields().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_accepts_valid_body() {
        let draft =
            ProductDraft::from_json(&json!({"name": "Widget", "price": 9.99, "quantity": 10}))
                .unwrap();
        assert_eq!(draft.name(), "Widget");
        assert_eq!(draft.price(), 9.99);
        assert_eq!(draft.quantity(), 10);
    }

    #[test]
    fn test_integer_price_and_whole_float_quantity() {
        let draft =
            ProductDraft::from_json(&json!({"name": "Gadget", "price": 5, "quantity": 3.0}))
                .unwrap();
        assert_eq!(draft.price(), 5.0);
        assert_eq!(draft.quantity(), 3);
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(ProductDraft::new("", 1.0, 1).is_err());
        assert!(ProductDraft::new("x".repeat(NAME_MAX_CHARS), 1.0, 1).is_ok());
        assert!(ProductDraft::new("x".repeat(NAME_MAX_CHARS + 1), 1.0, 1).is_err());
        // Counted in characters, not bytes
        assert!(ProductDraft::new("é".repeat(NAME_MAX_CHARS), 1.0, 1).is_ok());
    }

    #[test]
    fn test_zero_price_and_quantity_allowed() {
        assert!(ProductDraft::new("Free", 0.0, 0).is_ok());
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let errors =
            ProductDraft::from_json(&json!({"name": "", "price": -1, "quantity": -5})).unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "price", "quantity"]);
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let errors = ProductDraft::from_json(&json!({"name": 42, "quantity": "ten"})).unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "price", "quantity"]);
        assert_eq!(errors.fields()[1].message, "field required");
        assert_eq!(errors.fields()[2].message, "must be an integer");

        let errors =
            ProductDraft::from_json(&json!({"name": "A", "price": [1], "quantity": true}))
                .unwrap_err();
        assert_eq!(fields(&errors), vec!["price", "quantity"]);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let body = json!({"name": "Widget", "price": " 9.99", "quantity": "10"});
        let draft = ProductDraft::from_json(&body).unwrap();
        assert_eq!(draft.price(), 9.99);
        assert_eq!(draft.quantity(), 10);

        let body = json!({"name": "Widget", "price": "-1", "quantity": "1.5"});
        let errors = ProductDraft::from_json(&body).unwrap_err();
        assert_eq!(errors.fields()[0].message, "must be greater than or equal to 0");
        assert_eq!(errors.fields()[1].message, "must be an integer");
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let errors =
            ProductDraft::from_json(&json!({"name": "A", "price": 1, "quantity": 2.5})).unwrap_err();
        assert_eq!(errors.fields()[0].message, "must be an integer");
    }

    #[test]
    fn test_large_quantity_accepted() {
        let body = json!({"name": "Bulk", "price": 1, "quantity": 5_000_000_000u64});
        let draft = ProductDraft::from_json(&body).unwrap();
        assert_eq!(draft.quantity(), 5_000_000_000);

        let draft = ProductDraft::new("Bulk", 1.0, i64::MAX).unwrap();
        assert_eq!(draft.quantity(), i64::MAX as u64);
    }

    #[test]
    fn test_unrepresentable_quantity_rejected() {
        let too_large = format!("must be at most {}", i64::MAX);
        for quantity in [
            json!(u64::MAX),
            json!((i64::MAX as u64) + 1),
            json!("9223372036854775808"),
            json!(1e300),
        ] {
            let errors =
                ProductDraft::from_json(&json!({"name": "A", "price": 1, "quantity": quantity}))
                    .unwrap_err();
            assert_eq!(fields(&errors), vec!["quantity"]);
            assert_eq!(errors.fields()[0].message, too_large);
        }
    }

    #[test]
    fn test_non_object_body_rejected() {
        let errors = ProductDraft::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(fields(&errors), vec!["body"]);
    }

    #[test]
    fn test_from_draft_and_replace_keep_id() {
        let mut product =
            Product::from_draft(ProductId(4), ProductDraft::new("Old", 1.0, 1).unwrap());
        product.replace_with(ProductDraft::new("New", 2.5, 7).unwrap());

        assert_eq!(
            product,
            Product {
                id: ProductId(4),
                name: "New".to_string(),
                price: 2.5,
                quantity: 7,
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let product = Product::from_draft(ProductId(1), ProductDraft::new("Widget", 9.99, 10).unwrap());
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 1, "name": "Widget", "price": 9.99, "quantity": 10})
        );
    }
}
