use dramlogapp::store::{FsBackend, SlotBackend};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    // 1. Write
    backend.write("drinks", "[]").unwrap();

    // 2. Read
    let payload = backend.read("drinks").unwrap();
    assert_eq!(payload, Some("[]".to_string()));

    // 3. Remove
    backend.remove("drinks").unwrap();
    let payload_after = backend.read("drinks").unwrap();
    assert_eq!(payload_after, None);
}

#[test]
fn test_fs_backend_unwritten_slot_reads_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read("drinks").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("drinks", "[1, 2, 3]").unwrap();

    // Verify file exists with the expected name
    let expected_path = dir.path().join("drinks.json");
    assert!(expected_path.exists());

    // Verify content on disk
    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert_eq!(on_disk, "[1, 2, 3]");

    // Verify NO .tmp files are left behind
    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_write_replaces_whole_value() {
    let (_dir, backend) = setup();

    backend.write("drinks", "first payload").unwrap();
    backend.write("drinks", "second").unwrap();

    assert_eq!(backend.read("drinks").unwrap(), Some("second".to_string()));
}

#[test]
fn test_fs_backend_creates_data_dir_on_first_write() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("data");
    let backend = FsBackend::new(&nested);

    backend.write("drinks", "[]").unwrap();
    assert!(nested.join("drinks.json").exists());
}

#[test]
fn test_fs_backend_remove_of_absent_slot_is_ok() {
    let (_dir, backend) = setup();
    backend.remove("drinks").unwrap();
}

#[test]
fn test_fs_backend_slots_are_isolated() {
    let (_dir, backend) = setup();

    backend.write("drinks", "a").unwrap();
    backend.write("history", "b").unwrap();

    assert_eq!(backend.read("drinks").unwrap(), Some("a".to_string()));
    assert_eq!(backend.read("history").unwrap(), Some("b".to_string()));

    backend.remove("drinks").unwrap();
    assert_eq!(backend.read("drinks").unwrap(), None);
    assert_eq!(backend.read("history").unwrap(), Some("b".to_string()));
}
