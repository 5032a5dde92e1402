//! Request/response lines
//!
//! Each request is one JSON object per line:
//! `{"function": "convert", "args": [100, "cm", "meter"]}`.
//! Each response is one line, either `{"ok": <value>}` or `{"error": {...}}`.

use pagekit::{PageError, PageKit, Value};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub function: String,
    #[serde(default)]
    pub args: Vec<JsonValue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(JsonValue),
    Error(PageError),
}

impl From<Value> for Response {
    fn from(value: Value) -> Self {
        match value {
            Value::Error(e) => Response::Error(e),
            other => Response::Ok(other.to_json()),
        }
    }
}

/// Fallback line if a response cannot be serialized
const SERIALIZE_FAILURE: &str = r#"{"error":{"code":"INTERNAL","message":"Internal error: response serialization failed","severity":"fatal"}}"#;

/// Optional leading Text argument of `help` / `list_functions`
fn optional_text<'a>(args: &'a [Value], func: &str, arg: &str) -> Result<Option<&'a str>, PageError> {
    match args.first() {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Text(s)) => Ok(Some(s.as_str())),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(PageError::arg_type(func, arg, "Text", other.type_name())),
    }
}

pub fn handle_request(kit: &PageKit, request: &Request) -> Response {
    let args: Vec<Value> = request.args.iter().map(Value::from_json).collect();

    let result = match request.function.as_str() {
        "help" => match optional_text(&args, "help", "name") {
            Ok(name) => kit.help(name),
            Err(e) => Value::Error(e),
        },
        "list_functions" => match optional_text(&args, "list_functions", "category") {
            Ok(category) => kit.list_functions(category),
            Err(e) => Value::Error(e),
        },
        name => kit.call(name, &args),
    };
    Response::from(result)
}

/// Handle one input line; blank lines produce no response
pub fn handle_line(kit: &PageKit, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            tracing::debug!(function = %request.function, "request");
            handle_request(kit, &request)
        }
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            Response::Error(PageError::parse_error(e.to_string()))
        }
    };

    Some(serde_json::to_string(&response).unwrap_or_else(|_| SERIALIZE_FAILURE.to_string()))
}
