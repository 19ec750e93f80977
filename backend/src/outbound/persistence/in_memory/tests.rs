//! Behavioural coverage for the in-memory document store.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryDocumentStore {
    InMemoryDocumentStore::new()
}

#[fixture]
fn correlation() -> Correlation {
    Correlation::from_headers(Some("session-1"), Some("ada"))
}

fn board_fields(title: &str) -> BoardFields {
    BoardFields {
        title: title.to_owned(),
        description: "desc".to_owned(),
        owner: "ada".to_owned(),
        users: vec!["ada".to_owned()],
    }
}

fn column_fields(title: &str, order: i64) -> ColumnFields {
    ColumnFields {
        title: title.to_owned(),
        order,
    }
}

#[rstest]
#[tokio::test]
async fn boards_are_listed_in_insertion_order(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let first = BoardRepository::create(&store, board_fields("first"), &correlation)
        .await
        .expect("create first");
    let second = BoardRepository::create(&store, board_fields("second"), &correlation)
        .await
        .expect("create second");

    let boards = store.find_all().await.expect("list boards");

    assert_eq!(boards, vec![first, second]);
}

#[rstest]
#[tokio::test]
async fn update_replaces_fields_and_keeps_identity(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let board = BoardRepository::create(&store, board_fields("draft"), &correlation)
        .await
        .expect("create board");

    let updated = BoardRepository::update(&store, &board.id, board_fields("final"), &correlation)
        .await
        .expect("update board");

    assert_eq!(updated.id, board.id);
    assert_eq!(updated.title, "final");
    let fetched = BoardRepository::find_by_id(&store, &board.id)
        .await
        .expect("find board");
    assert_eq!(fetched, Some(updated));
}

#[rstest]
#[tokio::test]
async fn writes_to_absent_documents_report_not_exist(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let missing = ObjectId::generate();

    let board_update =
        BoardRepository::update(&store, &missing, board_fields("x"), &correlation).await;
    let board_delete = BoardRepository::delete_by_id(&store, &missing, &correlation).await;
    let column_create =
        ColumnRepository::create(&store, &missing, column_fields("x", 1), &correlation).await;
    let column_delete = ColumnRepository::delete_by_id(&store, &missing, &correlation).await;

    assert_eq!(board_update, Err(RepositoryError::NotExist));
    assert_eq!(board_delete, Err(RepositoryError::NotExist));
    assert_eq!(column_create, Err(RepositoryError::NotExist));
    assert_eq!(column_delete, Err(RepositoryError::NotExist));
}

#[rstest]
#[tokio::test]
async fn find_where_returns_only_columns_of_the_board(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let board = BoardRepository::create(&store, board_fields("a"), &correlation)
        .await
        .expect("create board a");
    let other = BoardRepository::create(&store, board_fields("b"), &correlation)
        .await
        .expect("create board b");
    let todo = ColumnRepository::create(&store, &board.id, column_fields("todo", 1), &correlation)
        .await
        .expect("create todo");
    ColumnRepository::create(&store, &other.id, column_fields("elsewhere", 1), &correlation)
        .await
        .expect("create elsewhere");

    let columns = store
        .find_where(&ColumnFilter::on_board(board.id))
        .await
        .expect("query columns");

    assert_eq!(columns, vec![todo]);
}

#[rstest]
#[tokio::test]
async fn deleting_a_board_cascades_to_its_columns(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let board = BoardRepository::create(&store, board_fields("a"), &correlation)
        .await
        .expect("create board");
    let column = ColumnRepository::create(&store, &board.id, column_fields("todo", 1), &correlation)
        .await
        .expect("create column");

    let removed = BoardRepository::delete_by_id(&store, &board.id, &correlation)
        .await
        .expect("delete board");

    assert_eq!(removed.id, board.id);
    let orphan = ColumnRepository::find_by_id(&store, &column.id)
        .await
        .expect("find column");
    assert!(orphan.is_none());
}

#[rstest]
#[tokio::test]
async fn every_write_is_audited_with_its_correlation(
    store: InMemoryDocumentStore,
    correlation: Correlation,
) {
    let board = BoardRepository::create(&store, board_fields("a"), &correlation)
        .await
        .expect("create board");
    let column = ColumnRepository::create(&store, &board.id, column_fields("todo", 1), &correlation)
        .await
        .expect("create column");
    BoardRepository::delete_by_id(&store, &board.id, &Correlation::default())
        .await
        .expect("delete board");

    let trail = store.audit_trail().expect("audit trail");
    let summary: Vec<_> = trail
        .iter()
        .map(|entry| (entry.action, entry.resource, entry.id, entry.correlation.guid()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (AuditAction::Create, ResourceContext::Board, board.id, "session-1"),
            (AuditAction::Create, ResourceContext::Column, column.id, "session-1"),
            (AuditAction::Delete, ResourceContext::Column, column.id, "undefined"),
            (AuditAction::Delete, ResourceContext::Board, board.id, "undefined"),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn reads_do_not_touch_the_audit_trail(store: InMemoryDocumentStore) {
    store.find_all().await.expect("list boards");
    BoardRepository::find_by_id(&store, &ObjectId::generate())
        .await
        .expect("find board");

    assert!(store.audit_trail().expect("audit trail").is_empty());
}

#[rstest]
#[case(3)]
#[case(1)]
#[tokio::test]
async fn audit_trail_keeps_only_the_most_recent_entries(
    #[case] capacity: usize,
    correlation: Correlation,
) {
    let store = InMemoryDocumentStore::with_audit_capacity(capacity);
    let board = BoardRepository::create(&store, board_fields("v0"), &correlation)
        .await
        .expect("create board");
    for version in 1..=50 {
        BoardRepository::update(
            &store,
            &board.id,
            board_fields(&format!("v{version}")),
            &correlation,
        )
        .await
        .expect("update board");
    }

    let trail = store.audit_trail().expect("audit trail");

    assert_eq!(trail.len(), capacity);
    assert!(trail.iter().all(|entry| entry.action == AuditAction::Update));
}

#[rstest]
#[tokio::test]
async fn a_zero_capacity_store_retains_no_audit_entries(correlation: Correlation) {
    let store = InMemoryDocumentStore::with_audit_capacity(0);

    BoardRepository::create(&store, board_fields("a"), &correlation)
        .await
        .expect("create board");

    assert!(store.audit_trail().expect("audit trail").is_empty());
}
