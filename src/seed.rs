//! Demo data for local development, gated behind SEED_DEMO in main.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::domain::DomainError;
use crate::models::{book, review, user};
use crate::services::rating;

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    if user::Entity::find().count(db).await? > 0 {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    let alice = user::ActiveModel {
        name: Set("Alice Martin".to_owned()),
        email: Set("alice@example.com".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let bob = user::ActiveModel {
        name: Set("Bob Chen".to_owned()),
        email: Set("bob@example.com".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let books = [
        (
            "Dune",
            "Frank Herbert",
            "Science Fiction",
            "Politics and prophecy on the desert planet Arrakis.",
        ),
        (
            "Foundation",
            "Isaac Asimov",
            "Science Fiction",
            "A mathematician plots to shorten a galactic dark age.",
        ),
        (
            "The Hobbit",
            "J.R.R. Tolkien",
            "Fantasy",
            "A reluctant burglar walks to a mountain and back again.",
        ),
    ];

    let mut book_ids = Vec::new();
    for (title, author, genre, description) in books {
        let model = book::ActiveModel {
            title: Set(title.to_owned()),
            author: Set(author.to_owned()),
            genre: Set(genre.to_owned()),
            description: Set(description.to_owned()),
            average_rating: Set(0.0),
            total_reviews: Set(0),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        book_ids.push(model.id);
    }

    let reviews = [
        (book_ids[0], alice.id, 5, "The spice must flow."),
        (book_ids[0], bob.id, 4, "Dense but rewarding."),
        (book_ids[1], alice.id, 4, "Psychohistory holds up."),
    ];

    for (book_id, user_id, rating_value, comment) in reviews {
        review::ActiveModel {
            book_id: Set(book_id),
            user_id: Set(user_id),
            rating: Set(rating_value),
            comment: Set(comment.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    // Seeded reviews bypass the review service, so settle the aggregates here
    for book_id in book_ids {
        rating::recompute_book_rating(db, book_id).await?;
    }

    Ok(())
}
