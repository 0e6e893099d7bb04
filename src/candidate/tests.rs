use super::*;

fn entries(paths: &[&str]) -> Entries {
    paths.iter().map(|p| ((*p).to_string(), (*p).to_string())).collect()
}

fn sample() -> CandidateList {
    let mut list = CandidateList::new();
    list.insert(CategoryKind::RuntimeConfig, entries(&["/etc/app/rc1", "/etc/app/rc2"]));
    list.insert(
        CategoryKind::Alias,
        entries(&["/home/u/.aliases/b", "/home/u/.aliases/a"]),
    );
    list
}

fn keys(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(Row::key).collect()
}

#[test]
fn test_alias_entries_sorted() {
    let list = sample();
    let aliases: Vec<&String> = list.entries(CategoryKind::Alias).keys().collect();
    assert_eq!(aliases, ["/home/u/.aliases/a", "/home/u/.aliases/b"]);
}

#[test]
fn test_unsorted_category_keeps_discovery_order() {
    let mut list = CandidateList::new();
    list.insert(CategoryKind::ShellProfile, entries(&["/home/u/.bashrc", "/home/u/.a.sh"]));
    let shell: Vec<&String> = list.entries(CategoryKind::ShellProfile).keys().collect();
    assert_eq!(shell, ["/home/u/.bashrc", "/home/u/.a.sh"]);
}

#[test]
fn test_rows_with_headers() {
    let rows = sample().rows(true);
    assert_eq!(
        keys(&rows),
        [
            "runtime-config",
            "/etc/app/rc1",
            "/etc/app/rc2",
            "alias",
            "/home/u/.aliases/a",
            "/home/u/.aliases/b",
        ]
    );
    assert_eq!(rows[0].label(), "-- Run-control files --");
}

#[test]
fn test_rows_without_headers() {
    let rows = sample().rows(false);
    assert!(rows.iter().all(|r| matches!(r, Row::File(_))));
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_category_order_is_fixed() {
    let mut list = CandidateList::new();
    list.insert(CategoryKind::HostSettings, entries(&["/srv/site/settings.php"]));
    list.insert(CategoryKind::InterpreterIni, entries(&["/etc/php.ini"]));
    list.insert(CategoryKind::Alias, entries(&["/a.site.yml"]));
    list.insert(CategoryKind::ShellProfile, entries(&["/home/u/.bashrc"]));
    let rows = list.rows(true);
    let headers: Vec<&str> = rows
        .iter()
        .filter(|r| matches!(r, Row::Header(_)))
        .map(Row::key)
        .collect();
    assert_eq!(
        headers,
        ["interpreter-ini", "shell-profile", "alias", "host-settings"]
    );
}

#[test]
fn test_duplicate_key_overwrites_label_in_place() {
    let mut list = CandidateList::new();
    list.insert(CategoryKind::InterpreterIni, entries(&["/etc/x.ini"]));
    let mut dup = Entries::new();
    dup.insert("/etc/x.ini".into(), "/etc/x.ini:12".into());
    list.insert(CategoryKind::RuntimeConfig, dup);

    assert_eq!(list.len(), 1);
    assert!(list.entries(CategoryKind::RuntimeConfig).is_empty());
    assert_eq!(
        list.entries(CategoryKind::InterpreterIni)["/etc/x.ini"],
        "/etc/x.ini:12"
    );
}

#[test]
fn test_filter_single_match() {
    let filtered = sample().filter(Some("rc2"));
    let files: Vec<FileEntry> = filtered.files().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].key, "/etc/app/rc2");
    // The header follows its surviving entry.
    assert_eq!(keys(&filtered.rows(true)), ["runtime-config", "/etc/app/rc2"]);
}

#[test]
fn test_filter_every_key_contains_needle() {
    let filtered = sample().filter(Some("aliases"));
    assert!(filtered.files().all(|f| f.key.contains("aliases")));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_filter_matching_only_category_id_keeps_nothing() {
    let filtered = sample().filter(Some("runtime-config"));
    assert!(filtered.is_empty());
    assert!(filtered.rows(true).is_empty());
}

#[test]
fn test_filter_is_case_sensitive_and_literal() {
    assert!(sample().filter(Some("RC1")).is_empty());
    assert!(sample().filter(Some("rc.")).is_empty());
}

#[test]
fn test_empty_or_absent_filter_is_identity() {
    let list = sample();
    assert_eq!(list.filter(None), list);
    assert_eq!(list.filter(Some("")), list);
}

#[test]
fn test_from_path() {
    let entry = FileEntry::from_path(Path::new("/etc/app/rc1")).unwrap();
    assert_eq!(entry.key, "/etc/app/rc1");
    assert_eq!(entry.label, entry.key);
}

#[cfg(unix)]
#[test]
fn test_from_path_rejects_non_utf8() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = Path::new(OsStr::from_bytes(b"/etc/app/rc\xff"));
    assert!(FileEntry::from_path(path).is_none());
}
