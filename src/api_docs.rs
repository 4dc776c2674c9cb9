use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::search::search_books,
        // Add other endpoints here as we document them
    ),
    tags(
        (name = "bookreviews", description = "Book review catalog API")
    )
)]
pub struct ApiDoc;
