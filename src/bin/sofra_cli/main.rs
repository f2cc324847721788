// ABOUTME: Sofra CLI - command-line front end for the meal planning engine
// ABOUTME: Computes targets, generates and validates plans, and prints shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors
//!
//! Usage:
//! ```bash
//! # Daily energy and macro targets
//! sofra-cli targets --profile profile.json
//!
//! # One-shot weekly plan from files (AI first when GEMINI_API_KEY is set)
//! sofra-cli plan --profile profile.json --recipes recipes.json --meals 4
//!
//! # Review a plan against the profile
//! sofra-cli validate --profile profile.json --plan plan.json --recipes recipes.json
//!
//! # Shopping list as text
//! sofra-cli grocery --plan plan.json --recipes recipes.json --text
//!
//! # Store-backed generation (--force marks a premium refresh)
//! sofra-cli generate --store sofra.json --owner 7f1c... --force
//!
//! # Replace one meal of a stored plan
//! sofra-cli swap --store sofra.json --plan-id 3a2b... --day 2 --meal dinner --recipe r-12
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sofra::logging::LoggingConfig;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "sofra-cli",
    about = "Sofra meal planning CLI",
    long_about = "Weekly meal plans from a profile and a recipe corpus, with AI generation and grocery lists."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print BMR, TDEE, daily calories and macro targets
    Targets {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a weekly plan from files
    Plan {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Recipe corpus JSON file (array of recipes)
        #[arg(long)]
        recipes: PathBuf,

        /// Meals per day (3 or 4)
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(3..=4))]
        meals: u8,

        /// Skip the AI generator even if configured
        #[arg(long)]
        no_ai: bool,
    },

    /// Review a plan's average nutrition against the profile's targets
    Validate {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Recipe corpus JSON file
        #[arg(long)]
        recipes: PathBuf,
    },

    /// Aggregate a plan's ingredients into a shopping list
    Grocery {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Recipe corpus JSON file
        #[arg(long)]
        recipes: PathBuf,

        /// Print the text checklist instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Generate and save a new plan for an owner in a JSON store file
    Generate {
        /// Store JSON file
        #[arg(long)]
        store: PathBuf,

        /// Owner (profile) id
        #[arg(long)]
        owner: Uuid,

        /// Meals per day (3 or 4)
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(3..=4))]
        meals: u8,

        /// Explicit refresh; premium once the owner has a plan
        #[arg(long)]
        force: bool,
    },

    /// Replace one meal of a stored plan
    Swap {
        /// Store JSON file
        #[arg(long)]
        store: PathBuf,

        /// Plan id
        #[arg(long)]
        plan_id: Uuid,

        /// Day index (0 = first day)
        #[arg(long)]
        day: usize,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long)]
        meal: String,

        /// Replacement recipe id
        #[arg(long)]
        recipe: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Targets { profile } => commands::plan::targets(&profile).await?,
        Command::Plan {
            profile,
            recipes,
            meals,
            no_ai,
        } => commands::plan::plan(&profile, &recipes, meals, no_ai).await?,
        Command::Validate {
            profile,
            plan,
            recipes,
        } => commands::plan::validate(&profile, &plan, &recipes).await?,
        Command::Grocery {
            plan,
            recipes,
            text,
        } => commands::grocery::grocery(&plan, &recipes, text).await?,
        Command::Generate {
            store,
            owner,
            meals,
            force,
        } => commands::store::generate(store, owner, meals, force).await?,
        Command::Swap {
            store,
            plan_id,
            day,
            meal,
            recipe,
        } => commands::store::swap(store, plan_id, day, &meal, recipe).await?,
    }

    Ok(())
}
