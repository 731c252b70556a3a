use utoipa::OpenApi;

use crate::entities::{review, trip, user};
use crate::handlers::{reviews, trips, users};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trips API", description = "Trips, users and reviews"),
    paths(
        trips::find_all_trips,
        trips::find_all_trips_raw_sql,
        trips::search_trips,
        trips::find_trip_by_pk,
        trips::create_trip,
        trips::create_trip_with_img,
        trips::update_trip,
        trips::delete_trip,
        users::find_all_users,
        users::signup,
        users::login,
        reviews::find_all_reviews,
        reviews::create_review,
    ),
    components(schemas(trip::Model, user::Model, review::Model)),
    tags(
        (name = "Trips", description = "The trips managing API"),
        (name = "Users", description = "Accounts and login"),
        (name = "Reviews", description = "Trip reviews")
    )
)]
pub struct ApiDoc;
