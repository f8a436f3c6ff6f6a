use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use rankx_core::{Error, ItemId, RankingEngine, Vote};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

const UNKNOWN_ITEM: &str = "Unknown Item";

#[derive(Deserialize)]
struct VoteRequest {
    winner_id: ItemId,
    loser_id: ItemId,
}

#[derive(Deserialize)]
struct RecentVotesQuery {
    limit: Option<i64>,
}

#[derive(Serialize)]
struct AnnotatedVote {
    #[serde(flatten)]
    vote: Vote,
    winner_name: String,
    loser_name: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        engine: Arc<RankingEngine>,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(Self::configure(engine.clone()))
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register state, extractor error handlers and every route.
    pub fn configure(engine: Arc<RankingEngine>) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(engine))
                .app_data(web::JsonConfig::default().error_handler(json_error))
                .app_data(web::QueryConfig::default().error_handler(query_error))
                .app_data(web::PathConfig::default().error_handler(path_error))
                .route("/api/items", web::get().to(list_items))
                .route("/api/items/category/{category}", web::get().to(list_by_category))
                .route("/api/items/{id}", web::get().to(get_item))
                .route("/api/matchups/random", web::get().to(random_matchup))
                .route("/api/votes", web::post().to(record_vote))
                .route("/api/votes/recent", web::get().to(recent_votes))
                .route("/api/stats", web::get().to(stats));
        }
    }
}

fn error_response(err: &Error) -> HttpResponse {
    let mut builder = match err {
        Error::InvalidInput(_) | Error::InvalidVote(_) => HttpResponse::BadRequest(),
        Error::NotFound(_) => HttpResponse::NotFound(),
        Error::InsufficientItems { .. } => HttpResponse::PreconditionFailed(),
    };
    builder.json(serde_json::json!({
        "error": err.kind(),
        "message": err.to_string(),
    }))
}

fn invalid_input<E>(cause: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = error_response(&Error::InvalidInput(cause.to_string()));
    InternalError::from_response(cause, response).into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_input(err)
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_input(err)
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    invalid_input(err)
}

fn parse_id(raw: &str) -> Result<ItemId, Error> {
    match raw.parse::<ItemId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidInput(format!(
            "'{}' is not a positive integer id",
            raw
        ))),
    }
}

async fn list_items(
    engine: web::Data<Arc<RankingEngine>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.ranked_items()))
}

async fn get_item(
    engine: web::Data<Arc<RankingEngine>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let result = parse_id(&path.into_inner()).and_then(|id| engine.get_item(id));
    match result {
        Ok(item) => Ok(HttpResponse::Ok().json(item)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn list_by_category(
    engine: web::Data<Arc<RankingEngine>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let category = path.into_inner();
    Ok(HttpResponse::Ok().json(engine.list_by_category(&category)))
}

async fn random_matchup(
    engine: web::Data<Arc<RankingEngine>>,
) -> ActixResult<HttpResponse> {
    match engine.random_matchup() {
        Ok(matchup) => Ok(HttpResponse::Ok().json(matchup)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn record_vote(
    engine: web::Data<Arc<RankingEngine>>,
    req: web::Json<VoteRequest>,
) -> ActixResult<HttpResponse> {
    let VoteRequest { winner_id, loser_id } = req.into_inner();

    if winner_id == 0 || loser_id == 0 {
        return Ok(error_response(&Error::InvalidInput(
            "winner_id and loser_id must be positive integers".to_string(),
        )));
    }

    match engine.record_vote(winner_id, loser_id) {
        Ok(receipt) => Ok(HttpResponse::Ok().json(receipt)),
        Err(e) => {
            warn!(winner_id, loser_id, error = %e, "Rejected vote");
            Ok(error_response(&e))
        }
    }
}

async fn recent_votes(
    engine: web::Data<Arc<RankingEngine>>,
    query: web::Query<RecentVotesQuery>,
) -> ActixResult<HttpResponse> {
    let votes = engine.recent_votes(query.limit);
    let names: HashMap<ItemId, String> = engine
        .list_items()
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect();

    let annotated: Vec<AnnotatedVote> = votes
        .into_iter()
        .map(|vote| {
            let name_of = |id: ItemId| {
                names.get(&id).cloned().unwrap_or_else(|| UNKNOWN_ITEM.to_string())
            };
            AnnotatedVote {
                winner_name: name_of(vote.winner_id),
                loser_name: name_of(vote.loser_id),
                vote,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(annotated))
}

async fn stats(
    engine: web::Data<Arc<RankingEngine>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.stats()))
}
