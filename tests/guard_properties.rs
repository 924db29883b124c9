use gx_shell::error::ErrorKind;
use gx_shell::guard::{
    ValidationOutcome, check_command, check_file_size, check_filename, check_path,
    check_search_term, is_sensitive_path,
};
use proptest::prelude::*;

proptest! {
    /// Any input carrying a NUL byte is refused by every string guard
    #[test]
    fn prop_nul_byte_always_denied(prefix in "[a-z0-9._-]{0,40}", suffix in "[a-z0-9._-]{0,40}") {
        let poisoned = format!("{prefix}\0{suffix}");
        prop_assert!(check_filename(&poisoned).is_denied());
        prop_assert!(check_path(&poisoned).is_denied());
        prop_assert!(check_search_term(&poisoned).is_denied());
        prop_assert!(check_command(&poisoned, &[]).is_denied());
    }

    #[test]
    fn prop_overlong_filename_denied(name in "[a-z]{256,400}") {
        prop_assert_eq!(check_filename(&name).kind(), Some(ErrorKind::TooLong));
    }

    #[test]
    fn prop_overlong_path_denied(path in "[a-z/]{261,400}") {
        prop_assert!(check_path(&path).is_denied());
    }

    /// An allowed filename never carries a separator, `..`, or a metacharacter
    #[test]
    fn prop_allowed_filename_is_a_safe_leaf(name in "\\PC{1,60}") {
        if check_filename(&name).is_allowed() {
            prop_assert!(!name.contains(['/', '\\', '\0']));
            prop_assert!(!name.contains(".."));
            prop_assert!(!name.contains([';', '|', '&', '$', '(', ')', '>', '<', '`']));
        }
    }

    /// An allowed path is relative and never climbs above its base
    #[test]
    fn prop_allowed_path_stays_inside(segments in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 1..8)) {
        let path = segments.join("/");
        if check_path(&path).is_allowed() {
            let mut depth: i32 = 0;
            for segment in &segments {
                match segment.as_str() {
                    "." => {}
                    ".." => depth -= 1,
                    _ => depth += 1,
                }
                prop_assert!(depth >= 0, "{} escapes its base", path);
            }
        }
    }

    /// Guards are pure: the same input always yields the same outcome
    #[test]
    fn prop_guards_are_idempotent(input in "\\PC{0,80}", size in any::<u64>()) {
        prop_assert_eq!(check_filename(&input), check_filename(&input));
        prop_assert_eq!(check_path(&input), check_path(&input));
        prop_assert_eq!(check_search_term(&input), check_search_term(&input));
        prop_assert_eq!(is_sensitive_path(&input), is_sensitive_path(&input));
        prop_assert_eq!(check_file_size(size), check_file_size(size));
        let args = vec![input.clone()];
        prop_assert_eq!(check_command("gx", &args), check_command("gx", &args));
    }
}

#[test]
fn test_reference_cases() {
    assert!(check_filename("../../etc/passwd").is_denied());
    assert_eq!(check_filename("passwd"), ValidationOutcome::Allowed);

    assert_eq!(check_path("/etc").kind(), Some(ErrorKind::AbsolutePathRejected));
    assert_eq!(check_path("subdir/../../x").kind(), Some(ErrorKind::PathTraversal));
    assert!(check_path("subdir/file.txt").is_allowed());

    assert!(is_sensitive_path("/etc/shadow"));
    assert!(!is_sensitive_path("project/etc_notes.txt"));
    assert!(!is_sensitive_path("notes_etc_plan.txt"));

    assert!(check_file_size(512 * 1024 * 1024).is_allowed());
    assert!(check_file_size(512 * 1024 * 1024 + 1).is_denied());

    let eleven: Vec<String> = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(check_command("gx", &eleven).kind(), Some(ErrorKind::TooManyArguments));
    assert!(check_command("gx", &eleven[..10]).is_allowed());
}
