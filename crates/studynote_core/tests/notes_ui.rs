use rusqlite::Connection;
use std::cell::Cell;
use studynote_core::db::open_db_in_memory;
use studynote_core::ui::{
    EMPTY_LIST_PLACEHOLDER, MSG_ALL_DELETED, MSG_MISSING_FIELDS, MSG_NOTE_DELETED,
    MSG_SAVE_FAILED,
};
use studynote_core::{
    Focus, FormMode, KeyValueRepository, Note, NotesStore, NotesUi, RepoError, RepoResult,
    SqliteKeyValueRepository, SubmitOutcome, NOTES_STORAGE_KEY,
};

/// SQLite repository whose writes can be switched off mid-session.
struct SwitchableRepo<'a> {
    inner: SqliteKeyValueRepository<'a>,
    fail_writes: &'a Cell<bool>,
}

impl KeyValueRepository for SwitchableRepo<'_> {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::MissingRequiredTable("local_storage"));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        self.inner.remove_item(key)
    }
}

fn started_ui(conn: &Connection) -> NotesUi<SqliteKeyValueRepository<'_>> {
    let repo = SqliteKeyValueRepository::try_new(conn).unwrap();
    let mut ui = NotesUi::new(NotesStore::new(repo));
    ui.start();
    ui
}

fn submit(
    ui: &mut NotesUi<SqliteKeyValueRepository<'_>>,
    title: &str,
    description: &str,
) -> SubmitOutcome {
    ui.set_title(title);
    ui.set_description(description);
    ui.submit()
}

fn persisted(conn: &Connection) -> Vec<Note> {
    let mut store = NotesStore::new(SqliteKeyValueRepository::try_new(conn).unwrap());
    store.load().to_vec()
}

#[test]
fn start_loads_persisted_notes_and_focuses_title() {
    let conn = open_db_in_memory().unwrap();
    SqliteKeyValueRepository::try_new(&conn)
        .unwrap()
        .set_item(NOTES_STORAGE_KEY, r#"[{"title":"Math","description":"Algebra"}]"#)
        .unwrap();

    let ui = started_ui(&conn);
    assert_eq!(ui.notes(), &[Note::new("Math", "Algebra")]);
    assert_eq!(ui.focus(), Focus::Title);
    assert_eq!(ui.submit_label(), "Add");
    assert!(!ui.notification().is_visible());
    assert!(!ui.is_empty());
}

#[test]
fn empty_list_reports_placeholder() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    assert!(ui.is_empty());
    assert_eq!(ui.placeholder(), EMPTY_LIST_PLACEHOLDER);

    submit(&mut ui, "Math", "Algebra");
    assert!(!ui.is_empty());

    ui.clear_all();
    assert!(ui.is_empty());
}

#[test]
fn write_failures_notify_and_leave_state_intact() {
    let conn = open_db_in_memory().unwrap();
    let fail_writes = Cell::new(false);
    let repo = SwitchableRepo {
        inner: SqliteKeyValueRepository::try_new(&conn).unwrap(),
        fail_writes: &fail_writes,
    };
    let mut ui = NotesUi::new(NotesStore::new(repo));
    ui.start();
    ui.set_title("Math");
    ui.set_description("Algebra");
    assert_eq!(ui.submit(), SubmitOutcome::Added);

    fail_writes.set(true);
    let saved = vec![Note::new("Math", "Algebra")];

    ui.edit(0);
    ui.set_description("II");
    assert_eq!(ui.submit(), SubmitOutcome::Failed);
    assert_eq!(ui.notification().message(), MSG_SAVE_FAILED);
    assert_eq!(ui.mode(), FormMode::Editing(0));
    assert_eq!(ui.form().title, "Math");
    assert_eq!(ui.form().description, "II");
    assert_eq!(ui.notes(), saved.as_slice());

    ui.dismiss_notification();
    ui.delete(0);
    assert_eq!(ui.notification().message(), MSG_SAVE_FAILED);
    assert_eq!(ui.notes(), saved.as_slice());

    ui.dismiss_notification();
    ui.clear_all();
    assert_eq!(ui.notification().message(), MSG_SAVE_FAILED);
    assert_eq!(ui.notes(), saved.as_slice());
    assert_eq!(ui.mode(), FormMode::Editing(0));

    assert_eq!(persisted(&conn), saved);

    fail_writes.set(false);
    assert_eq!(ui.submit(), SubmitOutcome::Updated(0));
    assert_eq!(persisted(&conn), vec![Note::new("Math", "II")]);
}

#[test]
fn submit_with_missing_field_is_rejected_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");

    for (title, description) in [("", "body"), ("title", ""), ("", "")] {
        let shown_before = ui.notification().shown_count();
        assert_eq!(submit(&mut ui, title, description), SubmitOutcome::Rejected);
        assert_eq!(ui.notes().len(), 1);
        assert_eq!(ui.notification().message(), MSG_MISSING_FIELDS);
        assert!(ui.notification().is_visible());
        assert_eq!(ui.notification().shown_count(), shown_before + 1);
        assert_eq!(ui.form().title, title);
        assert_eq!(ui.form().description, description);
    }
    assert_eq!(persisted(&conn).len(), 1);
}

#[test]
fn successful_submit_clears_form_and_refocuses_title() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    ui.set_focus(Focus::Notes);

    assert_eq!(submit(&mut ui, "Math", "Algebra"), SubmitOutcome::Added);
    assert!(ui.form().title.is_empty());
    assert!(ui.form().description.is_empty());
    assert_eq!(ui.focus(), Focus::Title);
    assert!(!ui.notification().is_visible());
}

#[test]
fn failed_validation_keeps_edit_session() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");

    ui.edit(0);
    ui.set_description("");
    assert_eq!(ui.submit(), SubmitOutcome::Rejected);
    assert_eq!(ui.mode(), FormMode::Editing(0));
    assert_eq!(ui.submit_label(), "Update");

    ui.set_description("Algebra II");
    assert_eq!(ui.submit(), SubmitOutcome::Updated(0));
    assert_eq!(ui.mode(), FormMode::Creating);
    assert_eq!(ui.notes(), &[Note::new("Math", "Algebra II")]);
}

#[test]
fn edit_on_another_note_overwrites_session() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");
    submit(&mut ui, "Sci", "Bio");

    ui.edit(0);
    ui.edit(1);
    assert_eq!(ui.mode(), FormMode::Editing(1));
    assert_eq!(ui.form().title, "Math");
    assert_eq!(ui.form().description, "Algebra");
    assert_eq!(persisted(&conn).len(), 2);
}

#[test]
fn edit_out_of_range_is_ignored() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    ui.set_title("draft");

    ui.edit(0);
    assert_eq!(ui.mode(), FormMode::Creating);
    assert_eq!(ui.form().title, "draft");
}

#[test]
fn delete_shows_two_notifications_and_keeps_last() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");
    submit(&mut ui, "Sci", "Bio");
    let shown_before = ui.notification().shown_count();

    ui.delete(1);

    assert_eq!(ui.notification().shown_count(), shown_before + 2);
    assert_eq!(ui.notification().message(), MSG_NOTE_DELETED);
    assert_eq!(ui.notes(), &[Note::new("Sci", "Bio")]);
    assert_eq!(persisted(&conn), vec![Note::new("Sci", "Bio")]);
}

#[test]
fn delete_of_missing_position_reports_it() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);

    ui.delete(0);
    assert_eq!(ui.notification().message(), "Note 1 no longer exists!");
    assert!(ui.notes().is_empty());
}

#[test]
fn submitting_stale_edit_closes_session_and_keeps_text() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");

    ui.edit(0);
    ui.clear_all();
    ui.set_description("Algebra II");

    assert_eq!(ui.submit(), SubmitOutcome::StaleEdit(0));
    assert_eq!(ui.notification().message(), "Note 1 no longer exists!");
    assert_eq!(ui.mode(), FormMode::Creating);
    assert_eq!(ui.form().title, "Math");
    assert!(ui.notes().is_empty());

    assert_eq!(ui.submit(), SubmitOutcome::Added);
    assert_eq!(ui.notes(), &[Note::new("Math", "Algebra II")]);
}

#[test]
fn clear_all_notifies_and_empties_storage() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    submit(&mut ui, "Math", "Algebra");

    ui.clear_all();
    assert!(ui.notes().is_empty());
    assert_eq!(ui.notification().message(), MSG_ALL_DELETED);
    assert!(persisted(&conn).is_empty());

    ui.dismiss_notification();
    assert!(!ui.notification().is_visible());
}

#[test]
fn typing_goes_to_focused_field() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);

    for ch in "Hi".chars() {
        ui.insert_char(ch);
    }
    ui.set_focus(Focus::Description);
    for ch in "Yo!".chars() {
        ui.insert_char(ch);
    }
    ui.backspace();

    assert_eq!(ui.form().title, "Hi");
    assert_eq!(ui.form().description, "Yo");
}

#[test]
fn full_session_scenario() {
    let conn = open_db_in_memory().unwrap();
    let mut ui = started_ui(&conn);
    assert!(ui.notes().is_empty());

    assert_eq!(submit(&mut ui, "Math", "Algebra"), SubmitOutcome::Added);
    assert_eq!(ui.notes(), &[Note::new("Math", "Algebra")]);

    assert_eq!(submit(&mut ui, "Sci", "Bio"), SubmitOutcome::Added);
    assert_eq!(
        ui.notes(),
        &[Note::new("Sci", "Bio"), Note::new("Math", "Algebra")]
    );

    ui.edit(1);
    assert_eq!(ui.form().title, "Math");
    assert_eq!(ui.form().description, "Algebra");
    assert_eq!(ui.submit_label(), "Update");

    assert_eq!(submit(&mut ui, "Math", "Algebra II"), SubmitOutcome::Updated(1));
    assert_eq!(
        ui.notes(),
        &[Note::new("Sci", "Bio"), Note::new("Math", "Algebra II")]
    );
    assert_eq!(ui.submit_label(), "Add");

    ui.delete(0);
    assert_eq!(ui.notes(), &[Note::new("Math", "Algebra II")]);

    ui.clear_all();
    assert!(ui.notes().is_empty());
    assert!(persisted(&conn).is_empty());
}
