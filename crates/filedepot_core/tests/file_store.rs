//! Behavior tests for the file store coordinator.
//!
//! Recording repository doubles stand in for the SQLite implementations so
//! each test can assert which operations ran and in which order.

use filedepot_core::{
    ContentRepository, FileId, FileStore, MetadataRepository, RepoError, RepoResult,
};
use rusqlite::Connection;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    ContentFind,
    ContentInsert,
    ContentUpdate,
    ContentDelete,
    MetadataFind,
    MetadataInsert,
    MetadataUpdate,
    MetadataDelete,
}

type CallLog = Rc<RefCell<Vec<Call>>>;

struct StubContentRepository {
    calls: CallLog,
    existing: Option<Vec<u8>>,
}

impl ContentRepository for StubContentRepository {
    fn insert(&self, _file_id: FileId, _content: &[u8], _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::ContentInsert);
        Ok(())
    }

    fn find_by_file_id(&self, _file_id: FileId, _conn: &Connection) -> RepoResult<Option<Vec<u8>>> {
        self.calls.borrow_mut().push(Call::ContentFind);
        Ok(self.existing.clone())
    }

    fn update(&self, _file_id: FileId, _content: &[u8], _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::ContentUpdate);
        Ok(())
    }

    fn delete(&self, _file_id: FileId, _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::ContentDelete);
        Ok(())
    }
}

struct StubMetadataRepository {
    calls: CallLog,
    existing: Option<Value>,
}

impl MetadataRepository for StubMetadataRepository {
    fn insert(&self, _file_id: FileId, _metadata: &Value, _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::MetadataInsert);
        Ok(())
    }

    fn find_by_file_id(&self, _file_id: FileId, _conn: &Connection) -> RepoResult<Option<Value>> {
        self.calls.borrow_mut().push(Call::MetadataFind);
        Ok(self.existing.clone())
    }

    fn update(&self, _file_id: FileId, _metadata: &Value, _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::MetadataUpdate);
        Ok(())
    }

    fn delete(&self, _file_id: FileId, _conn: &Connection) -> RepoResult<()> {
        self.calls.borrow_mut().push(Call::MetadataDelete);
        Ok(())
    }
}

fn store_with(
    existing_content: Option<Vec<u8>>,
    existing_metadata: Option<Value>,
) -> (
    FileStore<StubContentRepository, StubMetadataRepository>,
    CallLog,
) {
    let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
    let content = StubContentRepository {
        calls: calls.clone(),
        existing: existing_content,
    };
    let metadata = StubMetadataRepository {
        calls: calls.clone(),
        existing: existing_metadata,
    };
    (FileStore::new(content, metadata), calls)
}

fn bare_connection() -> Connection {
    Connection::open_in_memory().expect("opening an in-memory connection should succeed")
}

#[test]
fn store_inserts_content_then_metadata_when_file_is_new() {
    let (store, calls) = store_with(None, None);
    let conn = bare_connection();
    let file_id = Uuid::new_v4();

    store
        .store(file_id, b"the file content", &json!({"kind": "text"}), &conn)
        .expect("storing a new file should succeed");

    assert_eq!(
        *calls.borrow(),
        vec![Call::ContentFind, Call::ContentInsert, Call::MetadataInsert]
    );
}

#[test]
fn store_updates_content_then_metadata_when_file_exists() {
    let (store, calls) = store_with(Some(b"old".to_vec()), Some(json!({"v": 1})));
    let conn = bare_connection();
    let file_id = Uuid::new_v4();

    store
        .store(file_id, b"new", &json!({"v": 2}), &conn)
        .expect("replacing an existing file should succeed");

    assert_eq!(
        *calls.borrow(),
        vec![Call::ContentFind, Call::ContentUpdate, Call::MetadataUpdate]
    );
}

#[test]
fn find_assembles_file_from_both_tables() {
    let content = b"the file content".to_vec();
    let metadata = json!({"name": "report.pdf"});
    let (store, _calls) = store_with(Some(content.clone()), Some(metadata.clone()));
    let conn = bare_connection();
    let file_id = Uuid::new_v4();

    let found = store
        .find(file_id, &conn)
        .expect("find should succeed")
        .expect("file should be present");

    assert_eq!(found.file_id, file_id);
    assert_eq!(found.content, content);
    assert_eq!(found.metadata, metadata);
}

#[test]
fn find_returns_none_without_metadata_even_when_content_exists() {
    let (store, calls) = store_with(Some(b"orphan".to_vec()), None);
    let conn = bare_connection();

    let found = store
        .find(Uuid::new_v4(), &conn)
        .expect("find should succeed");

    assert!(found.is_none());
    // Metadata decides existence on the read path; content is not consulted.
    assert_eq!(*calls.borrow(), vec![Call::MetadataFind]);
}

#[test]
fn find_fails_when_metadata_exists_without_content() {
    let (store, _calls) = store_with(None, Some(json!({"stranded": true})));
    let conn = bare_connection();
    let file_id = Uuid::new_v4();

    let err = store
        .find(file_id, &conn)
        .expect_err("metadata without content must fail");

    assert!(matches!(err, RepoError::Consistency { file_id: id } if id == file_id));
    assert_eq!(
        err.to_string(),
        format!("No file content found for file id {file_id} but metadata exists for that id")
    );
}

#[test]
fn delete_removes_metadata_before_content() {
    let (store, calls) = store_with(Some(b"bytes".to_vec()), Some(json!({})));
    let conn = bare_connection();

    store
        .delete(Uuid::new_v4(), &conn)
        .expect("delete should succeed");

    assert_eq!(
        *calls.borrow(),
        vec![Call::MetadataDelete, Call::ContentDelete]
    );
}
