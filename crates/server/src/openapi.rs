use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct ShapeDoc {
    pub name: String,
    pub no_of_sides: i64,
    pub id: i64,
}

#[derive(ToSchema)]
pub struct GreetingDoc {
    pub message: String,
}

#[derive(serde::Serialize, ToSchema)]
pub struct DeletedDoc {
    #[serde(rename = "OK")]
    pub ok: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::shapes::list,
        crate::routes::shapes::get,
        crate::routes::shapes::create,
        crate::routes::shapes::replace,
        crate::routes::shapes::upsert,
        crate::routes::shapes::delete,
    ),
    components(schemas(ShapeDoc, GreetingDoc, DeletedDoc)),
    tags(
        (name = "root"),
        (name = "shapes")
    )
)]
pub struct ApiDoc;
