//! Turns an [`ApiResponse`] into console text and an exit code.

use super::transport::ApiResponse;
use super::{EXIT_API_ERROR, EXIT_OK};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub exit_code: i32,
}

/// Two-space indented JSON.
fn pretty(value: &Value) -> String {
    format!("{value:#}")
}

pub fn render(resp: &ApiResponse, no_content: bool) -> Rendered {
    let status = resp.status.as_u16();

    if resp.status.is_success() {
        let line = if no_content {
            format!("Status: {status}")
        } else if resp.is_json {
            match serde_json::from_str::<Value>(&resp.text) {
                Ok(value) => pretty(&value),
                Err(_) => resp.text.clone(),
            }
        } else {
            resp.text.clone()
        };
        return Rendered {
            lines: vec![line],
            exit_code: EXIT_OK,
        };
    }

    let mut lines = vec![format!("Status: {status}")];
    let detail = match serde_json::from_str::<Value>(&resp.text) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(pretty(&value)),
        Ok(Value::String(s)) if !s.is_empty() => Some(s),
        Ok(Value::Null | Value::Bool(false) | Value::String(_)) => None,
        Ok(other) => Some(other.to_string()),
        Err(_) if resp.text.is_empty() => None,
        Err(_) => Some(resp.text.clone()),
    };
    lines.extend(detail);

    Rendered {
        lines,
        exit_code: EXIT_API_ERROR,
    }
}
