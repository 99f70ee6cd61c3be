#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use taskdesk::libs::error::{Error, StoreError};
    use taskdesk::libs::messages::Alert;
    use taskdesk::libs::session::Session;
    use taskdesk::libs::task::{today, Priority, TaskId};
    use taskdesk::libs::validation::TaskDraft;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskdesk.db");
            SessionTestContext { temp_dir, db_path }
        }
    }

    impl SessionTestContext {
        fn open(&self) -> Session {
            Session::open(&self.db_path).unwrap()
        }
    }

    fn draft(title: &str, category: &str, priority: Priority) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: Some(format!("{} notes", title)),
            category: Some(category.to_string()),
            due_date: Some(today() + Days::new(7)),
            priority,
            completed: false,
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_empty_database(ctx: &mut SessionTestContext) {
        let session = ctx.open();
        assert!(session.tasks().is_empty());
        assert!(session.visible().is_empty());
        assert_eq!(session.progress().status_text(), "All tasks visible");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_unreachable_path_is_fatal(ctx: &mut SessionTestContext) {
        let path = ctx.temp_dir.path().join("missing").join("taskdesk.db");
        let error = Session::open(&path).err().unwrap();

        let alert = Alert::from(&error);
        assert_eq!(alert.title, "Initialization Error");
        assert_eq!(alert.header, "Failed to initialize application");
        assert!(alert.content.contains("Failed to initialize database at"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_new_task_persists(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        assert_eq!(session.tasks().count(), 1);
        assert_eq!(session.get(saved.id()).unwrap().title, "Pay rent");

        let reopened = ctx.open();
        let stored = reopened.get(saved.id()).unwrap();
        assert_eq!(stored.title, "Pay rent");
        assert_eq!(stored.category, "Home");
        assert_eq!(stored.priority, Priority::High);
        assert_eq!(stored.description.as_deref(), Some("Pay rent notes"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_edit_replaces_in_place(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let first = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();
        let second = session.save(&draft("Call plumber", "Home", Priority::Low), None).unwrap();

        let mut edit = TaskDraft::from_task(&first);
        edit.title = "Pay rent and water bill".to_string();
        let edited = session.save(&edit, Some(first.id())).unwrap();

        assert_eq!(edited.id(), first.id());
        let titles: Vec<&str> = session.tasks().iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, ["Pay rent and water bill", "Call plumber"]);

        let reopened = ctx.open();
        assert_eq!(reopened.tasks().count(), 2);
        assert_eq!(reopened.get(first.id()).unwrap().title, "Pay rent and water bill");
        assert!(reopened.get(second.id()).is_some());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_invalid_draft_changes_nothing(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        let mut edit = TaskDraft::from_task(&saved);
        edit.title = String::new();
        edit.due_date = None;
        let error = session.save(&edit, Some(saved.id())).unwrap_err();

        match &error {
            Error::Validation(errors) => {
                assert_eq!(errors.problems(), ["Title is required", "Due Date must be selected"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(Alert::from(&error).title, "Invalid Input");
        assert_eq!(session.get(saved.id()).unwrap().title, "Pay rent");
        assert_eq!(ctx.open().get(saved.id()).unwrap().title, "Pay rent");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_failed_save_keeps_memory(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        Connection::open(&ctx.db_path).unwrap().execute("DROP TABLE tasks", []).unwrap();

        let mut edit = TaskDraft::from_task(&saved);
        edit.title = "Changed".to_string();
        let error = session.save(&edit, Some(saved.id())).unwrap_err();
        assert!(matches!(error, Error::Store(StoreError::Save { .. })));
        assert_eq!(Alert::from(&error).title, "Save Error");

        assert!(session.save(&draft("Another", "Home", Priority::Low), None).is_err());
        assert_eq!(session.tasks().count(), 1);
        assert_eq!(session.get(saved.id()).unwrap().title, "Pay rent");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_storage_lost_after_startup(ctx: &mut SessionTestContext) {
        let data_dir = ctx.temp_dir.path().join("data");
        std::fs::create_dir(&data_dir).unwrap();
        let mut session = Session::open(data_dir.join("taskdesk.db")).unwrap();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        std::fs::remove_dir_all(&data_dir).unwrap();

        let error = session.save(&draft("Call plumber", "Home", Priority::Low), None).unwrap_err();
        assert!(matches!(error, Error::Store(StoreError::Save { .. })));
        let alert = Alert::from(&error);
        assert_eq!(alert.title, "Save Error");
        assert_eq!(alert.header, "Failed to save task");

        let error = session.delete(saved.id()).unwrap_err();
        assert!(matches!(error, Error::Store(StoreError::Delete { .. })));
        assert_eq!(Alert::from(&error).title, "Deletion Error");

        assert_eq!(session.tasks().count(), 1);
        assert!(session.get(saved.id()).is_some());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_editing_unknown_task(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let error = session
            .save(&draft("Ghost", "Home", Priority::Low), Some(&TaskId::from("gone")))
            .unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
        assert_eq!(Alert::from(&error).title, "No Selection");
        assert!(session.tasks().is_empty());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let keep = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();
        let gone = session.save(&draft("Call plumber", "Home", Priority::Low), None).unwrap();

        assert!(session.delete(gone.id()).unwrap());
        assert!(!session.delete(gone.id()).unwrap());
        assert_eq!(session.tasks().count(), 1);

        let reopened = ctx.open();
        assert!(reopened.get(keep.id()).is_some());
        assert!(reopened.get(gone.id()).is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_failed_delete_keeps_memory(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        Connection::open(&ctx.db_path).unwrap().execute("DROP TABLE tasks", []).unwrap();

        let error = session.delete(saved.id()).unwrap_err();
        assert!(matches!(error, Error::Store(StoreError::Delete { .. })));
        assert_eq!(Alert::from(&error).header, "Failed to delete task");
        assert!(session.get(saved.id()).is_some());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_toggle_completed(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let saved = session.save(&draft("Pay rent", "Home", Priority::High), None).unwrap();

        assert!(session.toggle_completed(saved.id()).unwrap().completed);
        assert!(session.get(saved.id()).unwrap().completed);
        assert!(ctx.open().get(saved.id()).unwrap().completed);

        assert!(!session.toggle_completed(saved.id()).unwrap().completed);
        assert!(matches!(
            session.toggle_completed(&TaskId::from("gone")),
            Err(Error::NotFound(_))
        ));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_filter_and_search(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let report = session.save(&draft("Quarterly report", "Work", Priority::High), None).unwrap();
        let laundry = session.save(&draft("Laundry", "Home", Priority::Low), None).unwrap();
        session.toggle_completed(laundry.id()).unwrap();

        session.set_filter(Some("High Priority"));
        let visible: Vec<&TaskId> = session.visible().iter().map(|task| task.id()).collect();
        assert_eq!(visible, [report.id()]);
        assert_eq!(session.progress().status_text(), "Showing 1 of 2 tasks");

        session.set_filter(Some("Completed Tasks"));
        let visible: Vec<&TaskId> = session.visible().iter().map(|task| task.id()).collect();
        assert_eq!(visible, [laundry.id()]);

        session.set_filter(Some("home"));
        assert_eq!(session.visible().len(), 1);

        session.set_filter(None);
        session.set_search("WORK");
        let visible: Vec<&TaskId> = session.visible().iter().map(|task| task.id()).collect();
        assert_eq!(visible, [report.id()]);

        session.set_search("");
        let progress = session.progress();
        assert_eq!(progress.status_text(), "All tasks visible");
        assert_eq!(progress.percent_label(), "50%");
        assert_eq!(progress.count_label(), "2 tasks");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_options_follow_categories(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.save(&draft("Quarterly report", "Work", Priority::High), None).unwrap();

        let options = session.filter_options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0], "All Tasks");
        assert_eq!(&options[8..], ["General", "Work"]);
        assert!(session.categories().contains("Work"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_overdue_and_due_today_views(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        let reference = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let mut due = draft("Due now", "Home", Priority::Medium);
        due.due_date = Some(reference);
        let due = session.save(&due, None).unwrap();

        let mut late = draft("Late", "Home", Priority::Medium);
        late.due_date = Some(reference - Days::new(1));
        let late = session.save(&late, None).unwrap();

        session.set_filter(Some("Due Today"));
        let visible: Vec<&TaskId> = session.visible_on(reference).iter().map(|task| task.id()).collect();
        assert_eq!(visible, [due.id()]);

        session.set_filter(Some("Overdue"));
        let visible: Vec<&TaskId> = session.visible_on(reference).iter().map(|task| task.id()).collect();
        assert_eq!(visible, [late.id()]);
    }
}
