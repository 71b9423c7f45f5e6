use serde_json::Value;

use super::checker::{Checker, SEMVER, child};
use super::{DocumentValidator, PathSegment, ValidationIssue};
use crate::model::KritaTheme;

#[derive(Clone, Copy)]
enum FieldKind {
    Text,
    TextList,
    Flag,
}

const SECTIONS: &[(&str, &[(&str, FieldKind)])] = &[
    (
        "tools",
        &[
            ("brush_presets", FieldKind::TextList),
            ("erasers", FieldKind::TextList),
            ("blending_modes", FieldKind::TextList),
        ],
    ),
    (
        "colour_guidance",
        &[
            ("palette", FieldKind::Text),
            ("value_range", FieldKind::Text),
            ("contrast", FieldKind::Text),
            ("saturation", FieldKind::Text),
        ],
    ),
    (
        "texture_guidance",
        &[
            ("allowed", FieldKind::TextList),
            ("usage_notes", FieldKind::Text),
        ],
    ),
    (
        "workflow_hints",
        &[
            ("preferred_layers", FieldKind::TextList),
            ("separate_lighting", FieldKind::Flag),
            ("notes", FieldKind::Text),
        ],
    ),
    (
        "restrictions",
        &[
            ("disallowed_tools", FieldKind::TextList),
            ("notes", FieldKind::Text),
        ],
    ),
];

/// Validates Krita theme documents. Unknown keys are allowed anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeValidator;

impl DocumentValidator for ThemeValidator {
    type Output = KritaTheme;

    fn validate(&self, value: &Value) -> Result<KritaTheme, Vec<ValidationIssue>> {
        let mut checker = Checker::default();
        if let Some(root) = checker.object(value, &[]) {
            checker.required_string(root, "id", &[]);
            checker.required_string(root, "name", &[]);
            checker.required_matching(root, "version", &SEMVER, "version (expected semver)", &[]);
            checker.required_string(root, "description", &[]);
            if let Some(target) = checker.required_string(root, "target", &[]) {
                if target != "krita" {
                    checker.issue(
                        vec![PathSegment::from("target")],
                        "Invalid literal value, expected \"krita\"",
                    );
                }
            }

            for (section, fields) in SECTIONS {
                let path = [PathSegment::from(*section)];
                let Some(object) = checker.optional_object(root, section, &[]) else {
                    continue;
                };
                for (field, kind) in fields.iter() {
                    let Some(field_value) = object.get(*field) else {
                        continue;
                    };
                    let field_path = child(&path, *field);
                    match kind {
                        FieldKind::Text => {
                            checker.string(field_value, &field_path);
                        }
                        FieldKind::TextList => {
                            checker.string_list(field_value, &field_path, false, None);
                        }
                        FieldKind::Flag => {
                            checker.boolean(field_value, &field_path);
                        }
                    }
                }
            }
        }
        checker.finish(value)
    }
}
