//! Field registry: the fixed catalogue of field types and their defaults.

use crate::field::{Field, FieldId, FieldKind, FieldType};

/// One catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeInfo {
    pub field_type: FieldType,
    pub id: &'static str,
    pub display_name: &'static str,
}

const fn info(field_type: FieldType) -> FieldTypeInfo {
    FieldTypeInfo {
        field_type,
        id: field_type.id(),
        display_name: field_type.display_name(),
    }
}

static FIELD_TYPES: [FieldTypeInfo; 9] = {
    let mut entries = [info(FieldType::ShortText); 9];
    let mut i = 0;
    while i < entries.len() {
        entries[i] = info(FieldType::ALL[i]);
        i += 1;
    }
    entries
};

/// Returns every supported field type in display order.
pub fn list_field_types() -> &'static [FieldTypeInfo] {
    &FIELD_TYPES
}

/// Returns the catalogue entry for a type.
pub fn lookup(field_type: FieldType) -> FieldTypeInfo {
    info(field_type)
}

/// Options given to a freshly created multiple choice field.
pub fn default_options() -> Vec<String> {
    (1..=3).map(|n| format!("Option {n}")).collect()
}

/// Returns the default attributes for a type.
pub fn default_kind(field_type: FieldType) -> FieldKind {
    match field_type {
        FieldType::ShortText => FieldKind::ShortText { placeholder: None },
        FieldType::LongText => FieldKind::LongText { placeholder: None },
        FieldType::MultipleChoice => FieldKind::MultipleChoice {
            options: default_options(),
        },
        FieldType::Number => FieldKind::Number { placeholder: None },
        FieldType::Date => FieldKind::Date,
        FieldType::FileUpload => FieldKind::FileUpload,
        FieldType::Phone => FieldKind::Phone { placeholder: None },
        FieldType::Email => FieldKind::Email { placeholder: None },
        FieldType::Payment => FieldKind::Payment { price: None },
    }
}

/// Creates a new field with registry defaults and a fresh id.
pub fn new_field(field_type: FieldType) -> Field {
    let label = lookup(field_type).display_name;
    Field::new(FieldId::new(), label, default_kind(field_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_nine_entries_in_order() {
        let types: Vec<_> = list_field_types().iter().map(|i| i.field_type).collect();
        assert_eq!(types, FieldType::ALL.to_vec());
    }

    #[test]
    fn test_registry_matches_field_type_names() {
        for info in list_field_types() {
            assert_eq!(info.id, info.field_type.id());
            assert_eq!(info.display_name, info.field_type.display_name());
            assert_eq!(lookup(info.field_type), *info);
        }
    }

    #[test]
    fn test_new_field_defaults() {
        let field = new_field(FieldType::ShortText);
        assert_eq!(field.label, "Short Text");
        assert!(!field.required);
        assert_eq!(field.placeholder(), None);
        assert_eq!(field.description, None);
    }

    #[test]
    fn test_multiple_choice_default_options() {
        let field = new_field(FieldType::MultipleChoice);
        assert_eq!(
            field.options().unwrap(),
            ["Option 1", "Option 2", "Option 3"]
        );
    }

    #[test]
    fn test_new_fields_get_distinct_ids() {
        assert_ne!(new_field(FieldType::Date).id(), new_field(FieldType::Date).id());
    }
}
