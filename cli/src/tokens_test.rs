use super::*;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("gradnote-cli-{}-{name}", std::process::id()))
        .join("token")
}

#[test]
fn missing_file_means_no_token() {
    let tokens = FileTokens::new(scratch("missing"));
    assert_eq!(tokens.load(), None);
    tokens.clear();
}

#[test]
fn save_creates_parent_and_load_trims() {
    let path = scratch("save");
    let tokens = FileTokens::new(&path);
    tokens.save("abc.def\n");
    assert!(path.exists());
    assert_eq!(tokens.load().as_deref(), Some("abc.def"));

    tokens.clear();
    assert_eq!(tokens.load(), None);
    assert!(!path.exists());
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn blank_file_is_no_token() {
    let path = scratch("blank");
    let tokens = FileTokens::new(&path);
    tokens.save("   ");
    assert_eq!(tokens.load(), None);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[cfg(unix)]
#[test]
fn saved_token_is_private_to_owner() {
    use std::os::unix::fs::PermissionsExt as _;

    let path = scratch("mode");
    let _ = fs::remove_dir_all(path.parent().unwrap());
    let tokens = FileTokens::new(&path);
    tokens.save("secret");

    let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(file_mode & 0o077, 0, "token file mode {file_mode:o}");
    let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode() & 0o777;
    assert_eq!(dir_mode & 0o077, 0, "token directory mode {dir_mode:o}");
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[cfg(unix)]
#[test]
fn existing_readable_file_is_tightened_on_save() {
    use std::os::unix::fs::PermissionsExt as _;

    let path = scratch("tighten");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    FileTokens::new(&path).save("new");
    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn default_path_ends_in_token() {
    let path = default_token_file();
    assert!(path.to_string_lossy().contains("gradnote"));
}
