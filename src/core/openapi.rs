use utoipa::OpenApi;

use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Registration API",
        description = "Single-endpoint intake backend for product registrations",
    ),
    paths(registrations_handlers::register_product),
    components(schemas(registrations_dtos::RegisterProductForm, MessageResponse)),
    tags(
        (name = "registrations", description = "Product registration intake")
    )
)]
pub struct ApiDoc;
