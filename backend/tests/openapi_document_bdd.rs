//! Behaviour tests for the generated OpenAPI document.
use std::sync::Mutex;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then};
use taskboard::ApiDoc;
use utoipa::OpenApi;
use utoipa::openapi::RefOr;
use utoipa::openapi::schema::Schema;

#[derive(Default)]
struct OpenApiWorld {
    document: Option<utoipa::openapi::OpenApi>,
}

#[fixture]
fn world() -> Mutex<OpenApiWorld> {
    Mutex::new(OpenApiWorld::default())
}

fn with_document<R>(
    world: &Mutex<OpenApiWorld>,
    f: impl FnOnce(&utoipa::openapi::OpenApi) -> R,
) -> R {
    let world = world.lock().expect("world lock");
    f(world.document.as_ref().expect("document should be generated"))
}

fn assert_schema_registered(world: &Mutex<OpenApiWorld>, name: &str) {
    with_document(world, |doc| {
        let components = doc.components.as_ref().expect("components");
        assert!(
            components.schemas.contains_key(name),
            "{name} schema should be registered"
        );
    });
}

fn assert_property(world: &Mutex<OpenApiWorld>, schema: &str, property: &str) {
    with_document(world, |doc| {
        let components = doc.components.as_ref().expect("components");
        let Some(RefOr::T(Schema::Object(object))) = components.schemas.get(schema) else {
            panic!("{schema} should be an inline object schema");
        };
        assert!(
            object.properties.contains_key(property),
            "{schema} should expose {property}"
        );
    });
}

#[given("the OpenAPI document is generated")]
fn generate_openapi_document(world: &Mutex<OpenApiWorld>) {
    world.lock().expect("world lock").document = Some(ApiDoc::openapi());
}

#[then("the components section contains the Board schema")]
fn contains_board_schema(world: &Mutex<OpenApiWorld>) {
    assert_schema_registered(world, "Board");
}

#[then("the components section contains the Column schema")]
fn contains_column_schema(world: &Mutex<OpenApiWorld>) {
    assert_schema_registered(world, "Column");
}

#[then("the components section contains the ErrorEnvelope schema")]
fn contains_error_envelope_schema(world: &Mutex<OpenApiWorld>) {
    assert_schema_registered(world, "ErrorEnvelope");
}

#[then("the Board schema exposes the _id property")]
fn board_exposes_id(world: &Mutex<OpenApiWorld>) {
    assert_property(world, "Board", "_id");
}

#[then("the Column schema exposes the boardId property")]
fn column_exposes_board_id(world: &Mutex<OpenApiWorld>) {
    assert_property(world, "Column", "boardId");
}

#[then("every resource path is documented")]
fn every_resource_path_is_documented(world: &Mutex<OpenApiWorld>) {
    with_document(world, |doc| {
        for path in [
            "/api/v1/boards",
            "/api/v1/boards/{boardId}",
            "/api/v1/boards/{boardId}/columns",
            "/api/v1/boards/{boardId}/columns/{columnId}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    });
}

#[scenario(path = "tests/features/openapi_document.feature")]
fn openapi_document(world: Mutex<OpenApiWorld>) {
    drop(world);
}
