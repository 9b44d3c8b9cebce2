//! JSON endpoints over the linter and renderer. Stateless: every request
//! carries the whole draft.

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::lint::Linter;
use crate::models::{default_examples, PromptDraft};
use crate::render::{self, PromptStats};

#[derive(Debug, Serialize, Deserialize)]
pub struct Composed {
    pub prompt: String,
    pub markdown: String,
    #[serde(flatten)]
    pub stats: PromptStats,
}

async fn lint(linter: web::Data<Linter>, draft: web::Json<PromptDraft>) -> impl Responder {
    let report = linter.lint(&draft);
    info!(issues = report.total(), "Linted draft");
    HttpResponse::Ok().json(report)
}

async fn compose(draft: web::Json<PromptDraft>) -> impl Responder {
    let prompt = render::final_prompt(&draft);
    HttpResponse::Ok().json(Composed {
        stats: PromptStats::of(&prompt),
        markdown: render::markdown(&draft),
        prompt,
    })
}

async fn examples() -> impl Responder {
    HttpResponse::Ok().json(default_examples())
}

/// Registers the routes; `Linter` must be provided as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/lint", web::post().to(lint))
        .route("/compose", web::post().to(compose))
        .route("/examples", web::get().to(examples));
}

pub async fn run(host: &str, port: u16, linter: Linter) -> std::io::Result<()> {
    let linter = web::Data::new(linter);
    info!(address = %format!("{}:{}", host, port), "Starting HTTP server");
    HttpServer::new(move || App::new().app_data(linter.clone()).configure(configure))
        .bind((host, port))?
        .run()
        .await
}
