//! # Aggregate Schemas
//!
//! An [`AggregateSchema`] is the static declaration of one OFX aggregate
//! type: its ordered field descriptors and its mutex groups. Schemas are
//! `const` values built from `const fn` constructors, so every aggregate
//! type carries its schema at compile time and there is no runtime
//! reconfiguration.
//!
//! ```
//! use ofx_core::CodeSet;
//! use ofx_schema::{AggregateSchema, FieldDescriptor};
//!
//! const CURRENCY: AggregateSchema = AggregateSchema::new(
//!     "CURRENCY",
//!     &[
//!         FieldDescriptor::decimal("currate").required(),
//!         FieldDescriptor::one_of("cursym", CodeSet::Currency).required(),
//!     ],
//!     &[],
//! );
//! assert!(CURRENCY.check_definition().is_ok());
//! ```

use std::collections::HashSet;

use ofx_core::{CodeSet, ScalarKind};

use crate::error::SchemaError;

/// Semantic type of a field slot.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A scalar value.
    Scalar(ScalarKind),
    /// A nested aggregate, owned by its parent.
    Aggregate(&'static AggregateSchema),
}

/// One named, typed, constrained slot of an aggregate.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name as it appears in raw input (lower-case OFX tag).
    pub name: &'static str,
    /// Semantic type.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
}

impl FieldDescriptor {
    /// An optional field of the given kind.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// An optional decimal field.
    pub const fn decimal(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Decimal))
    }

    /// An optional field restricted to `set`.
    pub const fn one_of(name: &'static str, set: CodeSet) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::OneOf(set)))
    }

    /// An optional free-text field of at most `max_length` characters.
    pub const fn text(name: &'static str, max_length: usize) -> Self {
        Self::new(
            name,
            FieldKind::Scalar(ScalarKind::Text {
                max_length: Some(max_length),
            }),
        )
    }

    /// An optional OFX date-time field.
    pub const fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::DateTime))
    }

    /// An optional nested aggregate.
    pub const fn aggregate(name: &'static str, schema: &'static AggregateSchema) -> Self {
        Self::new(name, FieldKind::Aggregate(schema))
    }

    /// Mark the field as required.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// A set of optional slots of which at most one may be populated.
///
/// A required group must have exactly one member populated.
#[derive(Debug, Clone, Copy)]
pub struct MutexGroup {
    /// Group name, reported in `MutexViolation` errors.
    pub name: &'static str,
    /// Names of the member fields, in declaration order.
    pub members: &'static [&'static str],
    /// Whether exactly one member must be populated.
    pub required: bool,
}

impl MutexGroup {
    /// An optional mutex group.
    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            name,
            members,
            required: false,
        }
    }

    /// Require exactly one member to be populated.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Static declaration of one aggregate type.
#[derive(Debug, Clone, Copy)]
pub struct AggregateSchema {
    /// OFX tag name of the aggregate (e.g. `STMTTRN`).
    pub name: &'static str,
    /// Field descriptors, in validation order.
    pub fields: &'static [FieldDescriptor],
    /// Mutex groups, checked after all fields.
    pub mutexes: &'static [MutexGroup],
}

impl AggregateSchema {
    /// Declare a schema.
    pub const fn new(
        name: &'static str,
        fields: &'static [FieldDescriptor],
        mutexes: &'static [MutexGroup],
    ) -> Self {
        Self {
            name,
            fields,
            mutexes,
        }
    }

    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Check that the schema is well formed, recursing into nested schemas.
    ///
    /// - field names are unique;
    /// - every mutex group has at least two members;
    /// - every member names a declared, optional field and appears in the
    ///   group only once.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Definition` describing the first problem found.
    pub fn check_definition(&self) -> Result<(), SchemaError> {
        let invalid = |reason: String| SchemaError::Definition {
            aggregate: self.name.to_string(),
            reason,
        };

        let mut names = HashSet::new();
        for field in self.fields {
            if !names.insert(field.name) {
                return Err(invalid(format!("field '{}' is declared twice", field.name)));
            }
            if let FieldKind::Aggregate(nested) = field.kind {
                nested.check_definition()?;
            }
        }

        for group in self.mutexes {
            if group.members.len() < 2 {
                return Err(invalid(format!(
                    "mutex group '{}' needs at least two members",
                    group.name
                )));
            }
            let mut seen = HashSet::new();
            for member in group.members {
                if !seen.insert(*member) {
                    return Err(invalid(format!(
                        "mutex group '{}' lists '{member}' twice",
                        group.name
                    )));
                }
                match self.field(member) {
                    None => {
                        return Err(invalid(format!(
                            "mutex group '{}' names undeclared field '{member}'",
                            group.name
                        )))
                    }
                    Some(field) if field.required => {
                        return Err(invalid(format!(
                            "mutex group '{}' names required field '{member}'",
                            group.name
                        )))
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}
