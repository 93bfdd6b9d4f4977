use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, generation, poke_type, pokemon, upload, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        generation::get_generations,
        generation::create_generation,
        generation::get_generation_by_id,
        generation::update_generation,
        generation::delete_generation,
        poke_type::get_types,
        poke_type::create_type,
        poke_type::get_type_by_id,
        poke_type::update_type,
        poke_type::delete_type,
        pokemon::get_pokemons,
        pokemon::create_pokemon,
        pokemon::get_pokemon_by_id,
        pokemon::update_pokemon,
        pokemon::delete_pokemon,
        upload::create_upload,
        user::get_users,
        user::create_user,
        user::update_user_role,
        user::create_login_code,
    ),
    tags(
        (name = "generation", description = "Generation management"),
        (name = "type", description = "Type and effectiveness management"),
        (name = "pokemon", description = "Pokemon management"),
        (name = "upload", description = "Media uploads"),
        (name = "user", description = "User administration"),
    )
)]
struct ApiDoc;

pub fn router(config: &Config) -> Router<AppState> {
    // Multipart framing adds overhead on top of the file ceiling itself.
    let upload_body_limit = config.upload.max_bytes as usize + 1024 * 1024;

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/admin/users",
            get(user::get_users).post(user::create_user),
        )
        .route("/api/admin/users/{id}/role", put(user::update_user_role))
        .route(
            "/api/admin/users/{id}/login-code",
            post(user::create_login_code),
        )
        .route(
            "/api/generations",
            get(generation::get_generations).post(generation::create_generation),
        )
        .route(
            "/api/generations/{id}",
            get(generation::get_generation_by_id)
                .put(generation::update_generation)
                .delete(generation::delete_generation),
        )
        .route(
            "/api/types",
            get(poke_type::get_types).post(poke_type::create_type),
        )
        .route(
            "/api/types/{id}",
            get(poke_type::get_type_by_id)
                .put(poke_type::update_type)
                .delete(poke_type::delete_type),
        )
        .route(
            "/api/pokemons",
            get(pokemon::get_pokemons).post(pokemon::create_pokemon),
        )
        .route(
            "/api/pokemons/{id}",
            get(pokemon::get_pokemon_by_id)
                .put(pokemon::update_pokemon)
                .delete(pokemon::delete_pokemon),
        )
        .route(
            "/api/uploads",
            post(upload::create_upload).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .nest_service("/uploads", ServeDir::new(&config.upload.dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
