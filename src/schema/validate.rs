//! The error-collecting validator walk.

use serde_json::Value;

use super::descriptor::{Field, Kind, Schema};
use crate::error::{ValidationFailure, Violation, ViolationKind};
use crate::icon::IconSet;
use crate::style::TokenRegistry;

/// Validates a raw document against a block's schema and token registry.
///
/// The walk is total: it visits every declared field, every array element,
/// every nested record, and every key the author actually wrote, collecting
/// all violations before returning. JSON `null` is treated as absence, so a
/// nulled-out optional field validates and a nulled-out required field
/// reports as missing.
///
/// On success the document is known to match the schema exactly — declared
/// fields well-typed, no unknown keys, icons present in `icons`, style
/// override keys recognized by `tokens`.
pub fn check(
    schema: &Schema,
    tokens: &TokenRegistry,
    raw: &Value,
    icons: &dyn IconSet,
) -> Result<(), ValidationFailure> {
    let object = match raw.as_object() {
        Some(object) => object,
        None => {
            return Err(ValidationFailure::single(Violation::document(
                ViolationKind::InvalidType { expected: "object" },
            )))
        }
    };

    let mut walk = Walk {
        tokens,
        icons,
        violations: Vec::new(),
    };
    walk.record("", schema.fields, object);

    if walk.violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(walk.violations))
    }
}

struct Walk<'a> {
    tokens: &'a TokenRegistry,
    icons: &'a dyn IconSet,
    violations: Vec<Violation>,
}

impl Walk<'_> {
    fn push(&mut self, path: &str, kind: ViolationKind) {
        self.violations.push(Violation::new(path, kind));
    }

    /// Checks a record's declared fields, then rejects undeclared keys.
    fn record(&mut self, prefix: &str, fields: &[Field], object: &serde_json::Map<String, Value>) {
        for field in fields {
            let path = join(prefix, field.name);
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        self.push(&path, ViolationKind::Missing);
                    }
                }
                Some(value) => self.value(&path, &field.kind, value),
            }
        }
        for key in object.keys() {
            if !fields.iter().any(|f| f.name == key) {
                self.push(&join(prefix, key), ViolationKind::UnknownField);
            }
        }
    }

    fn value(&mut self, path: &str, kind: &Kind, value: &Value) {
        match kind {
            Kind::Str => {
                if !value.is_string() {
                    self.wrong_type(path, kind);
                }
            }
            Kind::Number => {
                if !value.is_number() {
                    self.wrong_type(path, kind);
                }
            }
            Kind::StrList => match value.as_array() {
                None => self.wrong_type(path, kind),
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if !item.is_string() {
                            self.push(
                                &format!("{path}.{i}"),
                                ViolationKind::InvalidType { expected: "string" },
                            );
                        }
                    }
                }
            },
            Kind::Variant(allowed) => match value.as_str() {
                None => self.wrong_type(path, kind),
                Some(s) => {
                    if !allowed.contains(&s) {
                        self.push(
                            path,
                            ViolationKind::InvalidVariant {
                                value: s.to_string(),
                                allowed,
                            },
                        );
                    }
                }
            },
            Kind::Icon => match value.as_str() {
                None => self.wrong_type(path, kind),
                Some(name) => {
                    if !self.icons.exists(name) {
                        self.push(
                            path,
                            ViolationKind::UnknownIcon {
                                name: name.to_string(),
                            },
                        );
                    }
                }
            },
            Kind::Record(fields) => match value.as_object() {
                None => self.wrong_type(path, kind),
                Some(object) => self.record(path, fields, object),
            },
            Kind::RecordList(fields) => match value.as_array() {
                None => self.wrong_type(path, kind),
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        let item_path = format!("{path}.{i}");
                        match item.as_object() {
                            None => self.push(
                                &item_path,
                                ViolationKind::InvalidType { expected: "object" },
                            ),
                            Some(object) => self.record(&item_path, fields, object),
                        }
                    }
                }
            },
            Kind::Styles => match value.as_object() {
                None => self.wrong_type(path, kind),
                Some(object) => {
                    for (key, entry) in object {
                        let entry_path = join(path, key);
                        if !self.tokens.contains(key) {
                            self.push(
                                &entry_path,
                                ViolationKind::UnknownToken {
                                    name: key.to_string(),
                                },
                            );
                        } else if !entry.is_string() {
                            self.push(
                                &entry_path,
                                ViolationKind::InvalidType { expected: "string" },
                            );
                        }
                    }
                }
            },
        }
    }

    fn wrong_type(&mut self, path: &str, kind: &Kind) {
        self.push(
            path,
            ViolationKind::InvalidType {
                expected: kind.expected(),
            },
        );
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
