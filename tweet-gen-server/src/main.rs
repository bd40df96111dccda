use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tweet_gen_core::io::open_corpus;
use tweet_gen_core::model::dictionary::DictionaryStats;
use tweet_gen_core::{GeneratorConfig, TweetGenerator};

/// Largest number of tweets served by a single request.
const MAX_TWEETS_PER_REQUEST: usize = 100;

/// Startup arguments.
#[derive(Parser, Debug)]
#[clap(name = "tweet-gen-server", about = "Serves random tweets over HTTP")]
struct Args {
	/// Path to the corpus text file.
	#[clap(long)]
	corpus: PathBuf,

	/// Initial seed of the random generator.
	#[clap(long, default_value_t = 0)]
	seed: u64,

	/// Number of words to read from the corpus (all if absent).
	#[clap(long)]
	max_tokens: Option<usize>,

	/// Word cap of a tweet.
	#[clap(long, default_value_t = tweet_gen_core::config::DEFAULT_MAX_WORDS)]
	max_words: usize,

	#[clap(long, default_value = "127.0.0.1")]
	bind: String,

	#[clap(long, default_value_t = 5000)]
	port: u16,
}

/// Query parameters of `/v1/tweets`
#[derive(Deserialize)]
struct TweetsParams {
	count: Option<usize>,
}

#[derive(Deserialize)]
struct SeedQuery {
	seed: Option<u64>,
}

#[derive(Deserialize)]
struct LookupQuery {
	word: Option<String>,
}

/// JSON body of `/v1/stats`
#[derive(Serialize)]
struct StatsResponse {
	#[serde(flatten)]
	dictionary: DictionaryStats,
	tokens_loaded: usize,
	seed: u64,
}

#[derive(Serialize)]
struct SuccessorView<'a> {
	word: &'a str,
	repetitions: usize,
}

/// JSON body of `/v1/lookup`
#[derive(Serialize)]
struct LookupResponse<'a> {
	text: &'a str,
	occurrence_count: usize,
	terminator: bool,
	successors: Vec<SuccessorView<'a>>,
}

struct SharedData {
	generator: TweetGenerator,
}

impl TweetsParams {
	/// Number of tweets requested, defaulting to one.
	fn count(&self) -> Result<usize, String> {
		match self.count {
			None => Ok(1),
			Some(0) => Err("count must be at least 1".into()),
			Some(n) if n > MAX_TWEETS_PER_REQUEST => {
				Err(format!("count must be at most {MAX_TWEETS_PER_REQUEST}"))
			}
			Some(n) => Ok(n),
		}
	}
}

/// HTTP GET endpoint `/v1/tweets`
///
/// Returns one `Tweet <n>: ...` line per tweet, numbered from 1 per request.
#[get("/v1/tweets")]
async fn get_tweets(data: web::Data<Mutex<SharedData>>, query: web::Query<TweetsParams>) -> impl Responder {
	let count = match query.count() {
		Ok(n) => n,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match shared_data.generator.generate_many(count) {
		Ok(sentences) => {
			let body = sentences
				.iter()
				.enumerate()
				.map(|(i, sentence)| format!("Tweet {}: {}", i + 1, sentence))
				.collect::<Vec<_>>()
				.join("\n");
			HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body)
		}
		Err(e) => {
			warn!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	let generator = &shared_data.generator;
	HttpResponse::Ok().json(StatsResponse {
		dictionary: generator.dictionary().stats(),
		tokens_loaded: generator.tokens_read(),
		seed: generator.config().seed,
	})
}

#[get("/v1/lookup")]
async fn get_lookup(data: web::Data<Mutex<SharedData>>, query: web::Query<LookupQuery>) -> impl Responder {
	let word = match &query.word {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty word"),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	let dictionary = shared_data.generator.dictionary();

	let Some(entry) = dictionary.lookup(word) else {
		return HttpResponse::NotFound().body(format!("Word '{word}' is not in the dictionary"));
	};

	let successors = entry
		.successors()
		.iter()
		.filter_map(|successor| {
			dictionary.get(successor.word).map(|next| SuccessorView {
				word: next.text(),
				repetitions: successor.repetitions,
			})
		})
		.collect();

	HttpResponse::Ok().json(LookupResponse {
		text: entry.text(),
		occurrence_count: entry.occurrence_count(),
		terminator: entry.is_terminator(),
		successors,
	})
}

#[put("/v1/seed")]
async fn put_seed(data: web::Data<Mutex<SharedData>>, query: web::Query<SeedQuery>) -> impl Responder {
	let Some(seed) = query.seed else {
		return HttpResponse::BadRequest().body("Missing seed");
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	shared_data.generator.reseed(seed);
	info!("generator reseeded with {seed}");

	HttpResponse::Ok().body(format!("Generator reseeded with {seed}"))
}

/// Registers the endpoints on an app.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_tweets)
		.service(get_stats)
		.service(get_lookup)
		.service(put_seed);
}

/// Main entry point for the server.
///
/// Builds the generator from the corpus once, wraps it in a `Mutex` so that
/// requests draw from the seeded sequence one at a time, and starts an
/// Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let config = GeneratorConfig {
		seed: args.seed,
		max_tokens: args.max_tokens,
		max_words: args.max_words,
	};
	let corpus = open_corpus(&args.corpus)?;
	let generator = TweetGenerator::from_reader(corpus, config)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

	let shared_data = SharedData { generator };
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	info!("listening on {}:{}", args.bind, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(
				Cors::default()
					.allow_any_origin()
					.allowed_methods(vec!["GET", "PUT"]),
			)
			.app_data(shared_generator.clone())
			.configure(configure)
	})
		.bind((args.bind.as_str(), args.port))?
		.run()
		.await
}
