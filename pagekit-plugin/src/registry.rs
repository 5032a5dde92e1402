//! Plugin Registry

use crate::{FunctionPlugin, FunctionMeta, EvalContext};
use pagekit_core::{Value, PageError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    /// Registered function names, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => f.call(args, ctx),
            None => {
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = PageError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_functions() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                if score > 0 {
                    Some((func_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then alphabetical for stable output
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Count shared characters
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        // Penalize length difference
        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(PageError::not_found(name)),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: HashMap<String, Vec<String>> = HashMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert("functions".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, mut v)| {
                    v.sort_unstable();
                    (k, Value::List(v.into_iter().map(Value::Text).collect()))
                })
                .collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()));

        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("type".to_string(), Value::Text("function".to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut funcs: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .collect();
        funcs.sort_by_key(|meta| meta.name);

        Value::List(funcs.into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Object(obj)
            })
            .collect())
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;
    use pagekit_core::codes;

    struct Echo;

    static ECHO_ARGS: [ArgMeta; 1] = [ArgMeta::required("value", "Any", "Value to echo")];

    impl FunctionPlugin for Echo {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "echo_value",
                description: "Return the first argument",
                usage: "echo_value(value)",
                args: &ECHO_ARGS,
                returns: "Any",
                examples: &[],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            args.first().cloned().unwrap_or(Value::Null)
        }
    }

    fn registry() -> Arc<PluginRegistry> {
        Arc::new(PluginRegistry::new().with_function(Echo))
    }

    #[test]
    fn test_call_is_case_insensitive() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("ECHO_VALUE", &[Value::from(3.0)], &ctx);
        assert_eq!(result.as_number(), Some(3.0));
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("echo", &[], &ctx);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap().contains("echo_value"));
    }

    #[test]
    fn test_help_for_function() {
        let reg = registry();
        let help = reg.help(Some("echo_value"));
        let obj = help.as_object().unwrap();
        assert_eq!(obj.get("usage").and_then(|v| v.as_text()), Some("echo_value(value)"));
        assert_eq!(obj.get("args").and_then(|v| v.as_list()).map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_help_not_found() {
        let reg = registry();
        let help = reg.help(Some("nope"));
        assert_eq!(help.as_error().map(|e| e.code.as_str()), Some(codes::NOT_FOUND));
    }

    #[test]
    fn test_list_functions_by_category() {
        let reg = registry();
        assert_eq!(reg.list_functions(Some("test")).as_list().map(|l| l.len()), Some(1));
        assert_eq!(reg.list_functions(Some("units")).as_list().map(|l| l.len()), Some(0));
        assert_eq!(reg.function_names(), vec!["echo_value"]);
    }
}
