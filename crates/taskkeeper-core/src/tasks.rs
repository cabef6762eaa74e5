//! Task list mutations.
//!
//! A task list is an ordered sequence of names, unique by exact string
//! equality. Both operations are total: they never fail, they report whether
//! the list changed. No normalization is applied to names -- "Milk" and
//! "milk" are different tasks.

/// Append `name` to the list unless it is already present.
///
/// Returns true when the list changed.
pub fn add(tasks: &mut Vec<String>, name: &str) -> bool {
    if tasks.iter().any(|task| task == name) {
        return false;
    }
    tasks.push(name.to_string());
    true
}

/// Remove the first (and, by the uniqueness invariant, only) occurrence of
/// `name` from the list.
///
/// Returns true when the list changed.
pub fn remove(tasks: &mut Vec<String>, name: &str) -> bool {
    match tasks.iter().position(|task| task == name) {
        Some(index) => {
            tasks.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn add_appends_to_the_end() {
        let mut tasks = list(&["milk"]);
        assert!(add(&mut tasks, "eggs"));
        assert_eq!(tasks, list(&["milk", "eggs"]));
    }

    #[test]
    fn add_is_idempotent_under_repetition() {
        let mut tasks = Vec::new();
        assert!(add(&mut tasks, "clean"));
        assert!(!add(&mut tasks, "clean"));
        assert_eq!(tasks, list(&["clean"]));
    }

    #[test]
    fn add_does_not_normalize() {
        let mut tasks = list(&["milk"]);
        assert!(add(&mut tasks, "Milk"));
        assert!(add(&mut tasks, " milk"));
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn remove_of_absent_name_is_a_noop() {
        let mut tasks = list(&["milk", "eggs"]);
        assert!(!remove(&mut tasks, "bread"));
        assert_eq!(tasks, list(&["milk", "eggs"]));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut tasks = list(&["milk", "eggs", "bread"]);
        assert!(remove(&mut tasks, "eggs"));
        assert_eq!(tasks, list(&["milk", "bread"]));
    }

    #[test]
    fn add_then_remove_roundtrips() {
        let original = list(&["milk", "eggs"]);
        let mut tasks = original.clone();
        assert!(add(&mut tasks, "bread"));
        assert!(remove(&mut tasks, "bread"));
        assert_eq!(tasks, original);
    }
}
