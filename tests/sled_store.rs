use storage::{load_item, remove_item, save_item, Error, Result, SledStore};
use tempfile::TempDir;

#[test]
fn save_and_load() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let mut store = SledStore::open(temp_dir.path())?;

    save_item(&mut store, "key1", "value1")?;
    save_item(&mut store, "key2", "value2")?;

    assert_eq!(load_item(&mut store, "key1")?, Some("value1".to_owned()));
    assert_eq!(load_item(&mut store, "key2")?, Some("value2".to_owned()));
    assert_eq!(load_item(&mut store, "key3")?, None);

    Ok(())
}

#[test]
fn overwrite_value() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let mut store = SledStore::open(temp_dir.path())?;

    save_item(&mut store, "key1", "value1")?;
    save_item(&mut store, "key1", "value2")?;
    assert_eq!(load_item(&mut store, "key1")?, Some("value2".to_owned()));

    Ok(())
}

#[test]
fn remove_key() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let mut store = SledStore::open(temp_dir.path())?;

    save_item(&mut store, "key1", "value1")?;
    remove_item(&mut store, "key1")?;
    assert_eq!(load_item(&mut store, "key1")?, None);

    Ok(())
}

#[test]
fn remove_absent_key_is_noop() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let mut store = SledStore::open(temp_dir.path())?;

    remove_item(&mut store, "key1")?;
    assert_eq!(load_item(&mut store, "key1")?, None);

    Ok(())
}

#[test]
fn values_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    assert!(!SledStore::is_present(temp_dir.path()));

    let mut store = SledStore::open(temp_dir.path())?;
    save_item(&mut store, "key1", "value1")?;
    save_item(&mut store, "key2", "value2")?;
    remove_item(&mut store, "key2")?;
    drop(store);

    assert!(SledStore::is_present(temp_dir.path()));

    let mut store = SledStore::open(temp_dir.path())?;
    assert_eq!(load_item(&mut store, "key1")?, Some("value1".to_owned()));
    assert_eq!(load_item(&mut store, "key2")?, None);

    Ok(())
}

#[test]
fn non_utf8_value_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");

    let db = sled::open(temp_dir.path().join("storage.sled"))?;
    db.insert("key1", &[0xffu8, 0xfe][..])?;
    db.flush()?;
    drop(db);

    let mut store = SledStore::open(temp_dir.path())?;
    match load_item(&mut store, "key1") {
        Err(Error::Utf8(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }

    Ok(())
}
