//! Correlation of compiler-synthesized members.
//!
//! Maps auto-properties to their hidden backing storage and back, using the
//! fixed synthesis naming convention plus synthesis-attribute checks. The
//! inverse lookups are best-effort structural inference over generated
//! naming patterns, not guaranteed relations: name collisions or
//! non-standard synthesis defeat them, and they report `NotFound` rather
//! than guessing.

use crate::catalog::{Catalog, MemberId, MemberKind, Visibility};
use crate::QueryError;

const BACKING_PREFIX: &str = "<";
const BACKING_SUFFIX: &str = ">k__BackingField";

/// Compose the backing-field name for a property name.
fn backing_field_name(property: &str) -> String {
    format!("{BACKING_PREFIX}{property}{BACKING_SUFFIX}")
}

/// Extract the property name from a convention-named backing field.
///
/// The single fixed pattern: `<NAME>k__BackingField`.
fn property_name_of(field: &str) -> Option<&str> {
    field
        .strip_prefix(BACKING_PREFIX)?
        .strip_suffix(BACKING_SUFFIX)
        .filter(|name| !name.is_empty())
}

impl Catalog {
    /// True iff both accessors exist and both are compiler-synthesized.
    ///
    /// False the moment either accessor is hand-written or missing, and for
    /// non-property members.
    pub fn is_auto_property(&self, p: MemberId) -> bool {
        let MemberKind::Property { getter, setter, .. } = self.member(p).kind else {
            return false;
        };
        let (Some(getter), Some(setter)) = (getter, setter) else {
            return false;
        };
        self.member(getter).synthesized && self.member(setter).synthesized
    }

    /// The convention-named backing field of a property.
    ///
    /// Fails with `NotFound` if the declaring type has no such field;
    /// callers must not assume presence.
    pub fn backing_field_of(&self, p: MemberId) -> Result<MemberId, QueryError> {
        let data = self.member(p);
        if !matches!(data.kind, MemberKind::Property { .. }) {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not a property",
                self.member_name(p)
            )));
        }
        let field_name = backing_field_name(self.member_name(p));
        self.find_field(data.declaring, &field_name)
            .ok_or_else(|| {
                QueryError::NotFound(format!(
                    "no backing field `{field_name}` on `{}`",
                    self.type_name(data.declaring)
                ))
            })
    }

    /// The property a synthesized backing field belongs to.
    ///
    /// Requires the field to be compiler-synthesized and convention-named;
    /// `NotFound` otherwise.
    pub fn declaring_property_of(&self, f: MemberId) -> Result<MemberId, QueryError> {
        let data = self.member(f);
        if !matches!(data.kind, MemberKind::Field { .. }) {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not a field",
                self.member_name(f)
            )));
        }
        if !data.synthesized {
            return Err(QueryError::NotFound(format!(
                "field `{}` is not compiler-synthesized",
                self.member_name(f)
            )));
        }
        let Some(property) = property_name_of(self.member_name(f)) else {
            return Err(QueryError::NotFound(format!(
                "field `{}` does not follow the backing-field naming convention",
                self.member_name(f)
            )));
        };
        self.find_property(data.declaring, property).ok_or_else(|| {
            QueryError::NotFound(format!(
                "no property `{property}` on `{}`",
                self.type_name(data.declaring)
            ))
        })
    }

    /// The event a hidden storage field belongs to.
    ///
    /// Gated on the field being non-public and sharing the event's name.
    /// An accessibility approximation, not a synthesis-attribute check.
    pub fn declaring_event_of(&self, f: MemberId) -> Result<MemberId, QueryError> {
        let data = self.member(f);
        if !matches!(data.kind, MemberKind::Field { .. }) {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not a field",
                self.member_name(f)
            )));
        }
        if data.visibility != Visibility::NonPublic {
            return Err(QueryError::NotFound(format!(
                "field `{}` is public, not hidden event storage",
                self.member_name(f)
            )));
        }
        self.find_event(data.declaring, self.member_name(f))
            .ok_or_else(|| {
                QueryError::NotFound(format!(
                    "no event `{}` on `{}`",
                    self.member_name(f),
                    self.type_name(data.declaring)
                ))
            })
    }
}
