// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MyDish command-line client
//!
//! Browse and share recipes and menus on MyDish from a terminal. The
//! session token is stored between runs, so `mydish login` once and the
//! other commands work until the token expires.

use clap::{Parser, Subcommand};
use mydish_client::{
    config::Config,
    error::ApiError,
    models::{IngredientRow, NewMenuForm, NewRecipeForm, ProfileUpdate, Recipe},
    navigation::Navigation,
    services::FeedMode,
    time_utils::display_date,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mydish")]
#[command(author, version, about = "MyDish recipe sharing client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List recipes from every user, or only your own
    Recipes {
        #[arg(long)]
        mine: bool,
    },
    /// Show one recipe
    Recipe { id: u64 },
    /// Like or unlike a recipe
    Like { id: u64 },
    /// Show the comments on a recipe
    Comments { recipe_id: u64 },
    /// Comment on a recipe
    Comment { recipe_id: u64, text: String },
    /// Like or unlike a comment
    LikeComment { recipe_id: u64, comment_id: u64 },
    /// List menus
    Menus,
    /// Show one menu
    Menu { id: u64 },
    /// Create a menu from existing recipes
    CreateMenu {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
        /// Recipe to include; repeat for several
        #[arg(short, long = "recipe")]
        recipes: Vec<u64>,
    },
    /// Create a recipe
    CreateRecipe {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
        /// Ingredient as `name[:amount[:unit[:minutes]]]`; repeat for several
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Image URL; repeat for several
        #[arg(long = "image")]
        images: Vec<String>,
        /// Preparation step; repeat in order
        #[arg(short, long = "step")]
        steps: Vec<String>,
        /// Disable comments on the recipe
        #[arg(long)]
        no_comments: bool,
    },
    /// Show your profile
    Profile,
    /// Change your name, picture or password
    UpdateProfile {
        #[arg(short, long)]
        name: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        current_password: String,
        #[arg(long, default_value = "")]
        new_password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<ApiError>() {
            Some(api_err) => {
                tracing::debug!(error = %api_err, "Command failed");
                eprintln!("{}", api_err.user_message());
                if api_err.navigation() == Some(Navigation::Login) {
                    eprintln!("Run `mydish login` to start a new session.");
                }
            }
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing::debug!(api = %config.api_base_url, "Using MyDish API");
    let state = AppState::from_config(&config);

    match cli.command {
        Commands::Login { username, password } => {
            let (credential, _) = state.auth.login(&username, &password).await?;
            println!(
                "Logged in as {}",
                credential.user_name.as_deref().unwrap_or(&username)
            );
        }
        Commands::Register { username, password } => {
            state.auth.register(&username, &password).await?;
            println!("Account created. Run `mydish login` to sign in.");
        }
        Commands::Logout => {
            state.auth.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let session = state.auth.session();
            if session.bearer().is_none() {
                return Err(ApiError::Unauthenticated.into());
            }
            match (session.user_name.as_deref(), session.user_id) {
                (Some(name), Some(id)) => println!("{} (id {})", name, id),
                (Some(name), None) => println!("{}", name),
                (None, Some(id)) => println!("User {}", id),
                (None, None) => println!("Logged in"),
            }
        }
        Commands::Recipes { mine } => {
            let mut feed = state.recipe_feed();
            let mode = if mine {
                FeedMode::Mine
            } else {
                FeedMode::Explore
            };
            feed.set_mode(mode).await?;
            for recipe in feed.recipes().value().into_iter().flatten() {
                print_recipe_line(recipe);
            }
        }
        Commands::Recipe { id } => {
            let mut page = state.recipe_page(id);
            page.refresh().await?;
            if let Some(recipe) = page.recipe().value() {
                println!("{}", recipe.name);
                println!("by {}", recipe.author_name);
                if let Some(created) = recipe.created_at.as_deref() {
                    println!("{}", display_date(created));
                }
                println!();
                println!("{}", recipe.description);
                if !recipe.ingredients.is_empty() {
                    println!();
                    println!("Ingredients:");
                    for ingredient in &recipe.ingredients {
                        let amount = ingredient
                            .amount
                            .map(|a| format!("{} ", a))
                            .unwrap_or_default();
                        let unit = ingredient.unit.as_deref().unwrap_or("");
                        println!("  - {}{} {}", amount, unit, ingredient.name);
                    }
                }
                if let Some(steps) = recipe.step_by_step_guide.as_ref() {
                    println!();
                    for (n, step) in steps.iter().enumerate() {
                        println!("{}. {}", n + 1, step);
                    }
                }
                println!();
                println!(
                    "{} likes, {} comments{}",
                    recipe.like_count,
                    recipe.comment_count,
                    if recipe.liked_by_current_user {
                        " (liked)"
                    } else {
                        ""
                    }
                );
            }
        }
        Commands::Like { id } => {
            let mut page = state.recipe_page(id);
            page.refresh().await?;
            page.toggle_like().await?;
            if let Some(recipe) = page.recipe().value() {
                println!(
                    "{} {} ({} likes)",
                    if recipe.liked_by_current_user {
                        "Liked"
                    } else {
                        "Unliked"
                    },
                    recipe.name,
                    recipe.like_count
                );
            }
        }
        Commands::Comments { recipe_id } => {
            let mut feed = state.recipe_feed();
            feed.open_comments(recipe_id).await?;
            print_thread(&feed);
        }
        Commands::Comment { recipe_id, text } => {
            let mut feed = state.recipe_feed();
            feed.set_mode(FeedMode::Explore).await?;
            feed.open_comments(recipe_id).await?;
            feed.post_comment(recipe_id, &text).await?;
            print_thread(&feed);
        }
        Commands::LikeComment {
            recipe_id,
            comment_id,
        } => {
            let mut feed = state.recipe_feed();
            feed.open_comments(recipe_id).await?;
            feed.toggle_comment_like(comment_id).await?;
            print_thread(&feed);
        }
        Commands::Menus => {
            let mut board = state.menu_board();
            board.refresh().await?;
            for menu in board.menus().value().into_iter().flatten() {
                println!(
                    "[{}] {} ({} recipes)",
                    menu.id,
                    menu.name,
                    menu.recipes.len()
                );
            }
        }
        Commands::Menu { id } => {
            let menu = state.menus.get(id).await?;
            println!("{}", menu.name);
            println!("{}", menu.description);
            for recipe in &menu.recipes {
                println!("  [{}] {}", recipe.id, recipe.name);
            }
        }
        Commands::CreateMenu {
            name,
            description,
            recipes,
        } => {
            let mut form = NewMenuForm {
                name,
                description,
                recipe_ids: Vec::new(),
            };
            for id in recipes {
                form.toggle_recipe(id);
            }
            let mut board = state.menu_board();
            board.create(form).await?;
            println!("Menu created");
        }
        Commands::CreateRecipe {
            name,
            description,
            ingredients,
            images,
            steps,
            no_comments,
        } => {
            let form = NewRecipeForm {
                name,
                description,
                enable_comments: !no_comments,
                ingredients: ingredients.iter().map(String::as_str).map(ingredient_row).collect(),
                image_urls: images,
                steps,
            };
            state.recipes.create(form).await?;
            println!("Recipe created");
        }
        Commands::Profile => {
            let profile = state.profile.get().await?;
            println!("{} (id {})", profile.user_name, profile.user_id);
            if let Some(image) = profile.profile_image.filter(|i| !i.is_empty()) {
                println!("Picture: {}", image);
            }
        }
        Commands::UpdateProfile {
            name,
            image,
            current_password,
            new_password,
            confirm_password,
        } => {
            let profile = state
                .profile
                .update(ProfileUpdate {
                    user_name: name,
                    profile_image: image,
                    current_password,
                    new_password,
                    confirm_password,
                })
                .await?;
            println!("Profile updated: {}", profile.user_name);
        }
    }
    Ok(())
}

fn print_recipe_line(recipe: &Recipe) {
    println!(
        "[{}] {} by {} ({} likes, {} comments){}",
        recipe.id,
        recipe.name,
        recipe.author_name,
        recipe.like_count,
        recipe.comment_count,
        if recipe.liked_by_current_user {
            " *"
        } else {
            ""
        }
    );
}

fn print_thread(feed: &mydish_client::views::RecipeFeed) {
    let Some(comments) = feed.thread().and_then(|t| t.comments.value()) else {
        return;
    };
    if comments.is_empty() {
        println!("No comments yet");
    }
    for comment in comments {
        let when = comment.created.as_deref().map(display_date).unwrap_or_default();
        println!(
            "[{}] {} {}: {} ({} likes)",
            comment.id, when, comment.user_name, comment.body_text, comment.like_count
        );
    }
}

/// Parse `name[:amount[:unit[:minutes]]]` into a form row.
fn ingredient_row(raw: &str) -> IngredientRow {
    let mut parts = raw.splitn(4, ':');
    let mut row = IngredientRow {
        name: parts.next().unwrap_or_default().to_string(),
        amount: parts.next().unwrap_or_default().to_string(),
        ..IngredientRow::default()
    };
    if let Some(unit) = parts.next().filter(|u| !u.trim().is_empty()) {
        row.unit = unit.trim().to_uppercase();
    }
    row.average_cooking_time = parts.next().unwrap_or_default().to_string();
    row
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mydish_client=info,warn")),
        )
        .with(format)
        .init();
}
