use actix_web::{get, middleware, web, App, HttpServer, HttpResponse, Responder};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::minimap::RuleRegistry;
use crate::models::{Image, SheetId};
use crate::store::{codec, config};
use crate::world::World;

const INITIAL_IMAGE_SIZE: usize = 8192;
const CACHE_CONTROL: (&str, &str) = ("cache-control", "max-age=3600");

#[derive(Parser)]
pub struct ServeCommand {
  // Port to listen on
  #[clap(long, default_value_t = 3000)]
  port: u16,

  // Host to listen on
  #[clap(long, default_value = "localhost")]
  host: String,

  // World configuration
  #[clap(required=true)]
  config_file: String
}

impl ServeCommand {
  pub fn execute(&self) -> Result<()> {
    let root = config::Root::load(Path::new(&self.config_file))
      .with_context(|| format!("unable to read configuration {}", self.config_file))?;
    let registry = RuleRegistry::default();
    let mut worlds: HashMap<String, World> = HashMap::new();

    for world_config in root.worlds.iter() {
      if worlds.contains_key(&world_config.name) {
        bail!("World {} already exists in map", world_config.name);
      }
      let world = World::load(world_config, &registry)
        .with_context(|| format!("unable to load world {}", world_config.name))?;
      worlds.insert(world_config.name.clone(), world);
    }

    // create http server
    let rt = Runtime::new()?;
    rt.block_on(server(&self.host, self.port, Arc::new(worlds)))?;
    Ok(())
  }
}

type WorldsMapArc = Arc<HashMap<String, World>>;

fn text(status: StatusCode, body: &'static str) -> HttpResponse {
  HttpResponse::build(status)
    .content_type(ContentType(mime::TEXT_PLAIN))
    .body(body)
}

fn png(image: &Image) -> HttpResponse {
  let mut imgdata: Vec<u8> = Vec::with_capacity(INITIAL_IMAGE_SIZE);
  if let Err(err) = codec::write_png(image, &mut imgdata) {
    error!("unable to encode image: {}", err);
    return text(StatusCode::INTERNAL_SERVER_ERROR, "unable to encode image");
  }
  HttpResponse::Ok()
    .content_type(ContentType(mime::IMAGE_PNG))
    .append_header(CACHE_CONTROL)
    .body(imgdata)
}

#[get("/worlds/{name}/minimap.png")]
async fn get_minimap(
  worlds: web::Data<WorldsMapArc>,
  path: web::Path<String>,
) -> impl Responder {
  let name = path.into_inner();
  match worlds.get(&name) {
    Some(world) => png(world.minimap.buffer()),
    None => text(StatusCode::NOT_FOUND, "world not found"),
  }
}

#[get("/worlds/{name}/map.png")]
async fn get_map(
  worlds: web::Data<WorldsMapArc>,
  path: web::Path<String>,
) -> impl Responder {
  let name = path.into_inner();
  let world = match worlds.get(&name) {
    Some(w) => w,
    None => return text(StatusCode::NOT_FOUND, "world not found"),
  };
  match world.render() {
    Ok(image) => png(&image),
    Err(err) => {
      error!("unable to render world {}: {}", name, err);
      text(StatusCode::INTERNAL_SERVER_ERROR, "unable to render world")
    }
  }
}

#[get("/worlds/{name}/sheets/{sheet}/raster/{index}.png")]
async fn get_raster_sheet(
  worlds: web::Data<WorldsMapArc>,
  path: web::Path<(String, u16, i32)>,
) -> impl Responder {
  let (name, sheet, index) = path.into_inner();
  let world = match worlds.get(&name) {
    Some(w) => w,
    None => return text(StatusCode::NOT_FOUND, "world not found"),
  };
  if index < 0 {
    return text(StatusCode::BAD_REQUEST, "raster index must not be negative");
  }
  if !world.raster.is_loaded() {
    return text(StatusCode::NOT_FOUND, "raster not loaded");
  }
  match world.raster.get_raster_sheet(SheetId(sheet), index) {
    Ok(variant) => png(variant.image()),
    Err(_) => text(StatusCode::NOT_FOUND, "sheet not found"),
  }
}

async fn server(host: &str, port: u16, worlds: WorldsMapArc) -> std::io::Result<()> {
  info!("Starting server on {}:{}", host, port);
  HttpServer::new(move || {
      App::new()
        .app_data(web::Data::new(worlds.clone()))
        .wrap(middleware::Logger::default())
        .service(get_minimap)
        .service(get_map)
        .service(get_raster_sheet)
  })
  .bind((host, port))?
  .run()
  .await
}
