//! Unit conversion functions for PageKit

use pagekit_plugin::prelude::*;
use crate::format::to_fixed;
use crate::helpers::{extract_digits_or, extract_magnitude, extract_unit};
use crate::{units, LengthUnit};

static CONVERT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Magnitude to convert (Number or numeric Text)"),
    ArgMeta::required("from_unit", "Text", "Source unit: cm, meter, inch, foot"),
    ArgMeta::required("to_unit", "Text", "Target unit: cm, meter, inch, foot"),
];

/// Shared front half of `convert` and `convert_fixed`
fn convert_args(func: &str, args: &[Value]) -> Result<f64, PageError> {
    if args.len() < 3 {
        return Err(PageError::arg_count(func, 3, args.len()));
    }

    let value = extract_magnitude(&args[0], func, "value")?;
    let from = extract_unit(&args[1], func, "from_unit")?;
    let to = extract_unit(&args[2], func, "to_unit")?;

    units::convert(from, to, value).map_err(PageError::from)
}

// ============ convert ============

pub struct Convert;

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(100, \"cm\", \"meter\") → 1",
    "convert(1, \"meter\", \"inch\") → 39.3700787",
    "convert(2, \"foot\", \"inch\") → 24",
];

static CONVERT_RELATED: [&str; 2] = ["convert_fixed", "length_units"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a length between cm, meter, inch and foot",
            usage: "convert(value, from_unit, to_unit)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match convert_args("convert", args) {
            Ok(v) => Value::Number(v),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ convert_fixed ============

pub struct ConvertFixed;

static CONVERT_FIXED_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number", "Magnitude to convert (Number or numeric Text)"),
    ArgMeta::required("from_unit", "Text", "Source unit: cm, meter, inch, foot"),
    ArgMeta::required("to_unit", "Text", "Target unit: cm, meter, inch, foot"),
    ArgMeta::optional("digits", "Number", "Fractional digits in the output", "12"),
];

static CONVERT_FIXED_EXAMPLES: [&str; 2] = [
    "convert_fixed(\"100\", \"cm\", \"meter\") → \"1.000000000000\"",
    "convert_fixed(1, \"inch\", \"meter\", 4) → \"0.0254\"",
];

static CONVERT_FIXED_RELATED: [&str; 1] = ["convert"];

impl FunctionPlugin for ConvertFixed {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_fixed",
            description: "Convert a length and format it with a fixed number of decimals",
            usage: "convert_fixed(value, from_unit, to_unit, [digits])",
            args: &CONVERT_FIXED_ARGS,
            returns: "Text",
            examples: &CONVERT_FIXED_EXAMPLES,
            category: "units",
            related: &CONVERT_FIXED_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let converted = match convert_args("convert_fixed", args) {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        match extract_digits_or(args, 3, ctx.precision, "convert_fixed") {
            Ok(digits) => Value::Text(to_fixed(converted, digits)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ length_units ============

pub struct LengthUnits;

static LENGTH_UNITS_EXAMPLES: [&str; 1] = [
    "length_units() → [\"cm\", \"meter\", \"inch\", \"foot\"]",
];

impl FunctionPlugin for LengthUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "length_units",
            description: "List the units accepted by convert()",
            usage: "length_units()",
            args: &[],
            returns: "List",
            examples: &LENGTH_UNITS_EXAMPLES,
            category: "units",
            related: &CONVERT_FIXED_RELATED,
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(
            LengthUnit::ALL
                .iter()
                .map(|u| Value::Text(u.symbol().to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(std::sync::Arc::new(pagekit_plugin::PluginRegistry::new()))
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_convert_length() {
        let args = vec![Value::Number(100.0), text("cm"), text("meter")];
        let result = Convert.call(&args, &eval_ctx());
        assert_eq!(result.as_number(), Some(1.0));
    }

    #[test]
    fn test_convert_text_magnitude() {
        let args = vec![text("2"), text("foot"), text("inch")];
        let result = Convert.call(&args, &eval_ctx());
        assert_eq!(result.as_number(), Some(24.0));
    }

    #[test]
    fn test_convert_bad_magnitude() {
        let args = vec![text("ten"), text("cm"), text("meter")];
        let result = Convert.call(&args, &eval_ctx());
        assert_eq!(result.as_error().map(|e| e.code.as_str()), Some(codes::INVALID_MAGNITUDE));
    }

    #[test]
    fn test_convert_unknown_unit() {
        let args = vec![Value::Number(1.0), text("cm"), text("yard")];
        let result = Convert.call(&args, &eval_ctx());
        assert_eq!(result.as_error().map(|e| e.code.as_str()), Some(codes::UNKNOWN_UNIT));
    }

    #[test]
    fn test_convert_arg_errors() {
        let result = Convert.call(&[Value::Number(1.0)], &eval_ctx());
        assert_eq!(result.as_error().map(|e| e.code.as_str()), Some(codes::ARG_COUNT));

        let args = vec![Value::Number(1.0), Value::Number(2.0), text("cm")];
        let result = Convert.call(&args, &eval_ctx());
        assert_eq!(result.as_error().map(|e| e.code.as_str()), Some(codes::ARG_TYPE));
    }

    #[test]
    fn test_convert_fixed_default_precision() {
        let args = vec![text("1"), text("meter"), text("inch")];
        let result = ConvertFixed.call(&args, &eval_ctx());
        assert_eq!(result.as_text(), Some("39.370078700000"));
    }

    #[test]
    fn test_convert_fixed_explicit_digits() {
        let args = vec![Value::Number(1.0), text("inch"), text("meter"), Value::Number(4.0)];
        let result = ConvertFixed.call(&args, &eval_ctx());
        assert_eq!(result.as_text(), Some("0.0254"));
    }

    #[test]
    fn test_convert_fixed_context_precision() {
        let ctx = eval_ctx().with_precision(2);
        let args = vec![Value::Number(1.0), text("cm"), text("inch")];
        let result = ConvertFixed.call(&args, &ctx);
        assert_eq!(result.as_text(), Some("0.39"));
    }

    #[test]
    fn test_length_units() {
        let result = LengthUnits.call(&[], &eval_ctx());
        let list = result.as_list().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].as_text(), Some("cm"));
        assert_eq!(list[3].as_text(), Some("foot"));
    }
}
