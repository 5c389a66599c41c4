use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn reduce_maps_files_to_sorted_unique_dirs() {
    let targets = reduce(&["pkg/b/y.go", "main.go", "pkg/a/x.go", "pkg/b/z.go", "doc.go"]);
    assert_eq!(targets.dirs, strings(&[".", "pkg/a", "pkg/b"]));
}

#[test]
fn reduce_dedupes_and_sorts_files() {
    let targets = reduce(&["b.go", "a.go", "b.go"]);
    assert_eq!(targets.files, strings(&["a.go", "b.go"]));
}

#[test]
fn reduce_dirs_sorted_and_unique_for_any_order() {
    let inputs = [
        vec!["z/z.go", "a/a.go", "m/m.go", "a/b.go"],
        vec!["a/b.go", "m/m.go", "a/a.go", "z/z.go"],
        vec!["m/m.go", "z/z.go", "a/b.go", "a/a.go"],
    ];
    for input in inputs {
        let dirs = reduce(&input).dirs;
        let mut expected = dirs.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(dirs, expected);
        assert_eq!(dirs, strings(&["a", "m", "z"]));
    }
}

#[test]
fn reduce_empty_is_empty() {
    let targets = reduce::<&str>(&[]);
    assert!(targets.is_empty());
    assert!(targets.dirs.is_empty());
}

#[test]
fn extra_dirs_join_directory_set() {
    let targets = reduce_with_dirs(&["cmd/main.go"], &["pkg", "cmd", "."]);
    assert_eq!(targets.files, strings(&["cmd/main.go"]));
    assert_eq!(targets.dirs, strings(&[".", "cmd", "pkg"]));
}

#[test]
fn dirs_alone_are_not_empty() {
    let targets = reduce_with_dirs(&[] as &[&str], &["pkg"]);
    assert!(targets.files.is_empty());
    assert!(!targets.is_empty());
}
