use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::issue::{PathSegment, ValidationIssue};

pub(crate) static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?$").expect("semver pattern compiles")
});
pub(crate) static LOWER_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("identifier pattern compiles"));
pub(crate) static ARCHETYPE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*\.[a-z][a-z0-9_]*$").expect("archetype id pattern compiles")
});
pub(crate) static ASSET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^assets\.[a-z][a-z0-9_]*\.[a-z][a-z0-9_]*$").expect("asset id pattern compiles")
});

pub(super) type Object = Map<String, Value>;

pub(super) fn child(path: &[PathSegment], segment: impl Into<PathSegment>) -> Vec<PathSegment> {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(segment.into());
    next
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects issues while walking a JSON value.
#[derive(Debug, Default)]
pub(super) struct Checker {
    issues: Vec<ValidationIssue>,
}

impl Checker {
    pub fn issue(&mut self, path: Vec<PathSegment>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(path, message));
    }

    fn expected(&mut self, path: &[PathSegment], expected: &str, value: &Value) {
        self.issue(
            path.to_vec(),
            format!("Expected {expected}, received {}", type_name(value)),
        );
    }

    pub fn object<'v>(&mut self, value: &'v Value, path: &[PathSegment]) -> Option<&'v Object> {
        match value {
            Value::Object(object) => Some(object),
            other => {
                self.expected(path, "object", other);
                None
            }
        }
    }

    pub fn array<'v>(&mut self, value: &'v Value, path: &[PathSegment]) -> Option<&'v [Value]> {
        match value {
            Value::Array(items) => Some(items),
            other => {
                self.expected(path, "array", other);
                None
            }
        }
    }

    pub fn string<'v>(&mut self, value: &'v Value, path: &[PathSegment]) -> Option<&'v str> {
        match value {
            Value::String(text) => Some(text),
            other => {
                self.expected(path, "string", other);
                None
            }
        }
    }

    pub fn boolean(&mut self, value: &Value, path: &[PathSegment]) -> Option<bool> {
        match value {
            Value::Bool(flag) => Some(*flag),
            other => {
                self.expected(path, "boolean", other);
                None
            }
        }
    }

    pub fn required<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<&'v Value> {
        let value = object.get(key);
        if value.is_none() {
            self.issue(child(path, key), "Required");
        }
        value
    }

    pub fn required_object<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<&'v Object> {
        let value = self.required(object, key, path)?;
        self.object(value, &child(path, key))
    }

    pub fn optional_object<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<&'v Object> {
        let value = object.get(key)?;
        self.object(value, &child(path, key))
    }

    pub fn required_string<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let value = self.required(object, key, path)?;
        self.string(value, &child(path, key))
    }

    pub fn optional_string<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let value = object.get(key)?;
        self.string(value, &child(path, key))
    }

    pub fn optional_boolean(
        &mut self,
        object: &Object,
        key: &str,
        path: &[PathSegment],
    ) -> Option<bool> {
        let value = object.get(key)?;
        self.boolean(value, &child(path, key))
    }

    pub fn one_of<'v>(
        &mut self,
        value: &'v Value,
        options: &[&str],
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let text = self.string(value, path)?;
        if options.contains(&text) {
            return Some(text);
        }

        let expected = options
            .iter()
            .map(|option| format!("'{option}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        self.issue(
            path.to_vec(),
            format!("Invalid enum value. Expected {expected}, received '{text}'"),
        );
        None
    }

    pub fn required_one_of<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        options: &[&str],
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let value = self.required(object, key, path)?;
        self.one_of(value, options, &child(path, key))
    }

    pub fn matching<'v>(
        &mut self,
        value: &'v Value,
        pattern: &Regex,
        description: &str,
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let text = self.string(value, path)?;
        if pattern.is_match(text) {
            return Some(text);
        }
        self.issue(path.to_vec(), format!("Invalid {description}: \"{text}\""));
        None
    }

    pub fn required_matching<'v>(
        &mut self,
        object: &'v Object,
        key: &str,
        pattern: &Regex,
        description: &str,
        path: &[PathSegment],
    ) -> Option<&'v str> {
        let value = self.required(object, key, path)?;
        self.matching(value, pattern, description, &child(path, key))
    }

    /// Array of strings, optionally non-empty and each matching `pattern`.
    pub fn string_list<'v>(
        &mut self,
        value: &'v Value,
        path: &[PathSegment],
        nonempty: bool,
        pattern: Option<(&Regex, &str)>,
    ) -> Option<Vec<&'v str>> {
        let items = self.array(value, path)?;
        if nonempty && items.is_empty() {
            self.issue(path.to_vec(), "Array must contain at least 1 element(s)");
        }

        let mut values = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            let item_path = child(path, index);
            let checked = match pattern {
                Some((regex, description)) => self.matching(item, regex, description, &item_path),
                None => self.string(item, &item_path),
            };
            match checked {
                Some(text) => values.push(text),
                None => valid = false,
            }
        }
        valid.then_some(values)
    }

    /// Array of objects; `check` runs on every element that is an object.
    pub fn object_list<'v, F>(&mut self, value: &'v Value, path: &[PathSegment], mut check: F)
    where
        F: FnMut(&mut Self, &'v Object, &[PathSegment]),
    {
        let Some(items) = self.array(value, path) else {
            return;
        };
        for (index, item) in items.iter().enumerate() {
            let item_path = child(path, index);
            if let Some(object) = self.object(item, &item_path) {
                check(self, object, &item_path);
            }
        }
    }

    /// Positive integer that fits in `u32`.
    pub fn positive_integer(&mut self, value: &Value, path: &[PathSegment]) -> Option<u32> {
        let Value::Number(number) = value else {
            self.expected(path, "number", value);
            return None;
        };

        let message = match number.as_u64() {
            Some(0) => "Number must be greater than 0",
            Some(n) => match u32::try_from(n) {
                Ok(n) => return Some(n),
                Err(_) => "Number must be less than or equal to 4294967295",
            },
            None if number.is_i64() => "Number must be greater than 0",
            None => "Expected integer, received float",
        };
        self.issue(path.to_vec(), message);
        None
    }

    /// Deserializes the typed value once no structural issue was recorded.
    pub fn finish<T: DeserializeOwned>(self, value: &Value) -> Result<T, Vec<ValidationIssue>> {
        if !self.issues.is_empty() {
            return Err(self.issues);
        }
        T::deserialize(value).map_err(|err| vec![ValidationIssue::new(Vec::new(), err.to_string())])
    }
}
