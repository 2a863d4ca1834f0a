use serde::Serialize;
use std::collections::HashSet;

/// Authored metadata for one exercise shown on the report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub aim: &'static str,
    pub highlights: &'static [&'static str],
    /// Relative to the content root.
    pub source_path: &'static str,
}

pub const TASK_CATALOG: &[TaskDescriptor] = &[
    TaskDescriptor {
        id: "task-1",
        title: "Task 1: Largest Number Using Nested If",
        aim: "Determine the largest of three numbers using nested if statements in PHP.",
        highlights: &[
            "Stores three predefined numbers in an array and names each value.",
            "Decision making relies on nested if statements only, with no ternary or built-in max().",
            "Prints the input set alongside the largest value.",
        ],
        source_path: "php/task1_largest.php",
    },
    TaskDescriptor {
        id: "task-2",
        title: "Task 2: Reverse String Using strrev()",
        aim: "Reverse a string in PHP using the built-in strrev() function.",
        highlights: &[
            "Hard-coded input string keeps the output repeatable.",
            "Reverses the string with a single strrev() call.",
            "Prints the original and reversed strings on separate lines.",
        ],
        source_path: "php/task2_reverse.php",
    },
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("task id '{0}' is declared more than once")]
    DuplicateId(&'static str),
    #[error("task titled '{0}' has an empty id")]
    EmptyId(&'static str),
}

/// Checks that every descriptor carries a non-empty id unique within the list.
pub fn validate_catalog(descriptors: &[TaskDescriptor]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if descriptor.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(descriptor.title));
        }
        if !seen.insert(descriptor.id) {
            return Err(CatalogError::DuplicateId(descriptor.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        validate_catalog(TASK_CATALOG).expect("catalog ids are distinct");
        assert_eq!(TASK_CATALOG.len(), 2);
        assert_eq!(TASK_CATALOG[0].id, "task-1");
        assert_eq!(TASK_CATALOG[1].id, "task-2");
    }

    #[test]
    fn every_task_has_highlights_and_a_php_source() {
        for descriptor in TASK_CATALOG {
            assert!(!descriptor.highlights.is_empty(), "{}", descriptor.id);
            assert!(descriptor.source_path.ends_with(".php"), "{}", descriptor.id);
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let descriptors = [TASK_CATALOG[0], TASK_CATALOG[1], TASK_CATALOG[0]];
        assert_eq!(
            validate_catalog(&descriptors),
            Err(CatalogError::DuplicateId("task-1"))
        );
    }

    #[test]
    fn blank_ids_are_rejected() {
        let blank = TaskDescriptor {
            id: " ",
            ..TASK_CATALOG[1]
        };
        assert_eq!(
            validate_catalog(&[blank]),
            Err(CatalogError::EmptyId("Task 2: Reverse String Using strrev()"))
        );
    }
}
