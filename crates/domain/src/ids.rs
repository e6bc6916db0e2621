use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Character sheet record ID
define_id!(SheetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_id_uniqueness() {
        assert_ne!(SheetId::new(), SheetId::new());
    }

    #[test]
    fn test_sheet_id_uuid_roundtrip() {
        let id = SheetId::new();
        assert_eq!(SheetId::from_uuid(id.to_uuid()), id);
    }

    #[test]
    fn test_sheet_id_display_is_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(SheetId::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
