// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use crate::access::AccessMode;
use crate::operation::Operation;

use super::ModeExtractor;

/// Maps plain HTTP methods onto the modes they require.
///
/// PUT and DELETE replace or remove existing state and therefore require the full write set;
/// POST only ever adds to a container.
#[derive(Clone, Copy, Debug, Default)]
pub struct MethodModeExtractor;

impl ModeExtractor for MethodModeExtractor {
    fn required_modes(&self, operation: &Operation) -> Option<BTreeSet<AccessMode>> {
        let modes = match operation.method.as_str() {
            "GET" | "HEAD" => BTreeSet::from([AccessMode::Read]),
            "PUT" | "DELETE" => AccessMode::write_set(),
            "POST" => BTreeSet::from([AccessMode::Append]),
            _ => return None,
        };

        Some(modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_methods() {
        for method in ["GET", "HEAD"] {
            assert_eq!(
                MethodModeExtractor.required_modes(&Operation::new(method)),
                Some(BTreeSet::from([AccessMode::Read])),
                "{method}"
            );
        }
    }

    #[test]
    fn write_methods() {
        for method in ["PUT", "DELETE"] {
            assert_eq!(
                MethodModeExtractor.required_modes(&Operation::new(method)),
                Some(AccessMode::write_set()),
                "{method}"
            );
        }
    }

    #[test]
    fn post_requires_append_only() {
        assert_eq!(
            MethodModeExtractor.required_modes(&Operation::new("POST")),
            Some(BTreeSet::from([AccessMode::Append]))
        );
    }

    #[test]
    fn declines_other_methods() {
        for method in ["OPTIONS", "PATCH", "TRACE", "get"] {
            assert_eq!(
                MethodModeExtractor.required_modes(&Operation::new(method)),
                None,
                "{method}"
            );
        }
    }
}
