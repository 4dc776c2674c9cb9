//! Service-level tests for the rating aggregation invariant:
//! a book's average_rating/total_reviews always match its review set.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use bookreviews::db;
use bookreviews::domain::DomainError;
use bookreviews::models::{book, review, user};
use bookreviews::services::review_service::{self, ReviewInput};

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

async fn create_test_user(db: &DatabaseConnection, name: &str, email: &str) -> i32 {
    let now = chrono::Utc::now().to_rfc3339();
    let user = user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    user.insert(db).await.expect("Failed to create user").id
}

async fn create_test_book(db: &DatabaseConnection, title: &str) -> i32 {
    let now = chrono::Utc::now().to_rfc3339();
    let book = book::ActiveModel {
        title: Set(title.to_string()),
        author: Set("Test Author".to_string()),
        genre: Set("Fiction".to_string()),
        description: Set("A test book".to_string()),
        average_rating: Set(0.0),
        total_reviews: Set(0),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    book.insert(db).await.expect("Failed to create book").id
}

async fn book_aggregates(db: &DatabaseConnection, book_id: i32) -> (f64, i32) {
    let book = book::Entity::find_by_id(book_id)
        .one(db)
        .await
        .expect("Failed to fetch book")
        .expect("Book missing");
    (book.average_rating, book.total_reviews)
}

fn input(rating: i32, comment: &str) -> ReviewInput {
    ReviewInput {
        rating,
        comment: comment.to_string(),
    }
}

#[tokio::test]
async fn test_aggregates_follow_review_lifecycle() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;
    let bob = create_test_user(&db, "Bob", "bob@example.com").await;
    let book_id = create_test_book(&db, "Dune").await;

    // No reviews yet
    assert_eq!(book_aggregates(&db, book_id).await, (0.0, 0));

    // First review
    let first = review_service::create_review(&db, book_id, alice, input(4, "Good"))
        .await
        .expect("create failed");
    assert_eq!(book_aggregates(&db, book_id).await, (4.0, 1));

    // Second review by a different user
    review_service::create_review(&db, book_id, bob, input(2, "Not for me"))
        .await
        .expect("create failed");
    assert_eq!(book_aggregates(&db, book_id).await, (3.0, 2));

    // Deleting the rating-4 review leaves the rating-2 one
    review_service::delete_review(&db, first.id, alice)
        .await
        .expect("delete failed");
    assert_eq!(book_aggregates(&db, book_id).await, (2.0, 1));

    // Deleting the last review resets the aggregates to zero
    let remaining = review::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("one review left");
    review_service::delete_review(&db, remaining.id, bob)
        .await
        .expect("delete failed");
    assert_eq!(book_aggregates(&db, book_id).await, (0.0, 0));
}

#[tokio::test]
async fn test_update_recomputes_aggregates() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;
    let bob = create_test_user(&db, "Bob", "bob@example.com").await;
    let book_id = create_test_book(&db, "Foundation").await;

    let alice_review = review_service::create_review(&db, book_id, alice, input(5, "Loved it"))
        .await
        .unwrap();
    review_service::create_review(&db, book_id, bob, input(1, "Did not finish"))
        .await
        .unwrap();
    assert_eq!(book_aggregates(&db, book_id).await, (3.0, 2));

    let updated = review_service::update_review(&db, alice_review.id, alice, input(3, "On reflection"))
        .await
        .expect("update failed");
    assert_eq!(updated.rating, 3);
    assert_eq!(book_aggregates(&db, book_id).await, (2.0, 2));
}

#[tokio::test]
async fn test_fractional_average() {
    let db = setup_test_db().await;
    let book_id = create_test_book(&db, "Hyperion").await;

    for (i, rating) in [5, 4, 4].into_iter().enumerate() {
        let user_id = create_test_user(
            &db,
            &format!("User {}", i),
            &format!("user{}@example.com", i),
        )
        .await;
        review_service::create_review(&db, book_id, user_id, input(rating, "ok"))
            .await
            .unwrap();
    }

    let (average, total) = book_aggregates(&db, book_id).await;
    assert_eq!(total, 3);
    assert!((average - 13.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_duplicate_review_is_conflict_and_leaves_state_alone() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;
    let book_id = create_test_book(&db, "Dune").await;

    let original = review_service::create_review(&db, book_id, alice, input(4, "Good"))
        .await
        .unwrap();

    let err = review_service::create_review(&db, book_id, alice, input(1, "Changed my mind"))
        .await
        .expect_err("second review for the same pair must fail");
    assert!(matches!(err, DomainError::Conflict(_)));

    // Existing review untouched, aggregates unchanged
    let stored = review::Entity::find_by_id(original.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.rating, 4);
    assert_eq!(stored.comment, "Good");
    assert_eq!(book_aggregates(&db, book_id).await, (4.0, 1));
}

#[tokio::test]
async fn test_create_review_for_missing_book() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;

    let err = review_service::create_review(&db, 999, alice, input(4, "Good"))
        .await
        .expect_err("review for a missing book must fail");
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn test_only_author_may_mutate() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;
    let bob = create_test_user(&db, "Bob", "bob@example.com").await;
    let book_id = create_test_book(&db, "Dune").await;

    let alice_review = review_service::create_review(&db, book_id, alice, input(4, "Good"))
        .await
        .unwrap();

    let err = review_service::update_review(&db, alice_review.id, bob, input(1, "Mine now"))
        .await
        .expect_err("foreign update must fail");
    assert!(matches!(err, DomainError::Forbidden));

    let err = review_service::delete_review(&db, alice_review.id, bob)
        .await
        .expect_err("foreign delete must fail");
    assert!(matches!(err, DomainError::Forbidden));

    // Review still present
    assert_eq!(book_aggregates(&db, book_id).await, (4.0, 1));
}

#[tokio::test]
async fn test_input_validation() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;
    let book_id = create_test_book(&db, "Dune").await;

    for bad_rating in [0, 6, -1] {
        let err = review_service::create_review(&db, book_id, alice, input(bad_rating, "x"))
            .await
            .expect_err("out-of-range rating must fail");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    let err = review_service::create_review(&db, book_id, alice, input(3, "   "))
        .await
        .expect_err("blank comment must fail");
    assert!(matches!(err, DomainError::Validation(_)));

    // Nothing was written
    assert_eq!(book_aggregates(&db, book_id).await, (0.0, 0));
}

#[tokio::test]
async fn test_mutating_missing_review() {
    let db = setup_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@example.com").await;

    let err = review_service::update_review(&db, 42, alice, input(3, "ghost"))
        .await
        .expect_err("updating a missing review must fail");
    assert!(matches!(err, DomainError::NotFound));

    let err = review_service::delete_review(&db, 42, alice)
        .await
        .expect_err("deleting a missing review must fail");
    assert!(matches!(err, DomainError::NotFound));
}
