mod client;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use client::{ApiClient, Configuration};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "receptai")]
#[command(about = "ReceptAI CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ServerArgs {
    /// Server URL (default: http://localhost:3000)
    #[arg(long, default_value = "http://localhost:3000", env = "RECEPTAI_SERVER")]
    server: String,
}

#[derive(Args)]
struct AuthedArgs {
    #[command(flatten)]
    server: ServerArgs,
    /// Access token from `register` or `login`
    #[arg(long, env = "RECEPTAI_TOKEN")]
    token: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server (unauthenticated)
    Ping {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Create an account and print its access token
    Register {
        #[command(flatten)]
        server: ServerArgs,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and print an access token
    Login {
        #[command(flatten)]
        server: ServerArgs,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Detect food products on a photo
    Detect {
        #[command(flatten)]
        auth: AuthedArgs,
        /// JPEG, PNG or WebP photo
        photo: PathBuf,
    },
    /// Find dishes that can be cooked from the given ingredients
    Find {
        #[command(flatten)]
        auth: AuthedArgs,
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Generate a full recipe for a dish
    Generate {
        #[command(flatten)]
        auth: AuthedArgs,
        /// Dish title
        #[arg(long)]
        dish: String,
        /// Ingredients to cook with
        ingredients: Vec<String>,
    },
    /// Mark a dish as cooked
    Cook {
        #[command(flatten)]
        auth: AuthedArgs,
        dish_id: i32,
    },
    /// Show cooking history
    History {
        #[command(flatten)]
        auth: AuthedArgs,
    },
}

fn authed(auth: AuthedArgs) -> ApiClient {
    ApiClient::new(Configuration::new(&auth.server.server, Some(auth.token)))
}

fn anonymous(server: ServerArgs) -> ApiClient {
    ApiClient::new(Configuration::new(&server.server, None))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output: Value = match cli.command {
        Commands::Ping { server } => anonymous(server).get("/api/test/unauthed-ping").await?,
        Commands::Register {
            server,
            email,
            password,
        } => {
            anonymous(server)
                .post_json("/auth/register", &json!({"email": email, "password": password}))
                .await?
        }
        Commands::Login {
            server,
            email,
            password,
        } => {
            anonymous(server)
                .post_json("/auth/login", &json!({"email": email, "password": password}))
                .await?
        }
        Commands::Detect { auth, photo } => {
            authed(auth).upload_photo("/detect-products", &photo).await?
        }
        Commands::Find { auth, ingredients } => {
            authed(auth)
                .post_json("/dishes/find", &json!({"ingredients": ingredients}))
                .await?
        }
        Commands::Generate {
            auth,
            dish,
            ingredients,
        } => {
            authed(auth)
                .post_json(
                    "/generate-recipe",
                    &json!({"dish_title": dish, "ingredients": ingredients}),
                )
                .await?
        }
        Commands::Cook { auth, dish_id } => {
            authed(auth)
                .post_json("/history", &json!({"dish_id": dish_id}))
                .await?
        }
        Commands::History { auth } => authed(auth).get("/history").await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
