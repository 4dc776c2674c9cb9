use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    /// 1-5 inclusive, validated before insert
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Book,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Reviewer identity as exposed by the API: display name only,
/// no other user fields leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub id: i32,
    pub name: String,
}

// DTO for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    pub rating: i32,
    pub comment: String,
    pub user: ReviewAuthor,
    pub created_at: String,
    pub updated_at: String,
}

impl Review {
    pub fn from_model(model: Model, user: Option<super::user::Model>) -> Self {
        let user = ReviewAuthor {
            id: model.user_id,
            name: user.map(|u| u.name).unwrap_or_else(|| "Unknown".to_string()),
        };

        Self {
            id: model.id,
            book_id: model.book_id,
            rating: model.rating,
            comment: model.comment,
            user,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
