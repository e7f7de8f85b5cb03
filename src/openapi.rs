//! OpenAPI description of the sport routes.

use crate::handlers::sport;
use crate::model::{Sport, SportPayload};
use crate::response::{ErrorMessage, ViolationList};
use crate::validation::Violation;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(sport::list, sport::create, sport::update, sport::delete),
    components(schemas(Sport, SportPayload, ErrorMessage, ViolationList, Violation)),
    tags((name = "sports", description = "Sport resource"))
)]
pub struct ApiDoc;
