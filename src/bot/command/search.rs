//! `/search` command.
//!
//! One subcommand per platform, each with a category choice and a free text
//! query. Results are only served in the platform's search channel and are
//! shown ephemerally, one hit per page.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    ResolvedOption, ResolvedValue,
};

use crate::{
    bot::{command::string_option, embed::build_search_page, paginator::Paginator},
    config::Config,
    error::AppError,
    model::mod_database::{SearchCategory, SearchPlatform},
    service::search::ModSearchService,
    state::AppState,
};

pub const COMMAND: &str = "search";

pub const WRONG_CHANNEL_MESSAGE: &str = "This command can only be used in the #search channel.";

pub const DATABASE_UNREACHABLE_MESSAGE: &str =
    "Could not reach the mod database. Please try again later.";

/// A parsed `/search <platform> <category> <query>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub platform: SearchPlatform,
    pub category: SearchCategory,
    pub query: String,
}

impl SearchRequest {
    /// Reads the invoked subcommand and its options.
    ///
    /// # Returns
    /// - `Ok(SearchRequest)` - Known platform with a category valid for it
    /// - `Err(AppError::BadRequest)` - Missing subcommand, option or unknown choice
    pub fn from_options(options: &[ResolvedOption<'_>]) -> Result<Self, AppError> {
        let (subcommand, sub_options) = options
            .iter()
            .find_map(|option| match &option.value {
                ResolvedValue::SubCommand(sub_options) => Some((option.name, sub_options)),
                _ => None,
            })
            .ok_or_else(|| AppError::BadRequest("Missing search platform".to_string()))?;

        Self::parse(
            subcommand,
            string_option(sub_options, "category")?,
            string_option(sub_options, "query")?,
        )
    }

    /// Builds a request from raw option values.
    ///
    /// # Arguments
    /// - `subcommand` - Invoked subcommand name, `ps3` or `xbox360`
    /// - `category_value` - Value of the category choice
    /// - `query` - Search text, kept as given
    ///
    /// # Returns
    /// - `Ok(SearchRequest)` - Known platform with a category valid for it
    /// - `Err(AppError::BadRequest)` - Unknown platform, or a category of another platform
    pub fn parse(subcommand: &str, category_value: &str, query: &str) -> Result<Self, AppError> {
        let platform = SearchPlatform::from_subcommand(subcommand).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown search platform '{}'", subcommand))
        })?;
        let category = SearchCategory::from_choice(platform, category_value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Category '{}' is not available for {:?}",
                category_value, platform
            ))
        })?;

        Ok(Self {
            platform,
            category,
            query: query.to_string(),
        })
    }

    /// Reply for a search that matched nothing.
    pub fn no_results_message(&self) -> String {
        format!(
            "No result(s) found for {} in {}",
            self.query,
            self.category.label()
        )
    }
}

/// Whether searches for `platform` may run in `channel_id`.
pub fn is_search_channel(
    config: &Config,
    platform: SearchPlatform,
    channel_id: ChannelId,
) -> bool {
    channel_id.get() == config.search_channel_id(platform)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND)
        .description("Searches the Arisen Studio mod database")
        .add_option(platform_option(
            SearchPlatform::Ps3,
            "ps3",
            "Search PS3 game mods and homebrew",
        ))
        .add_option(platform_option(
            SearchPlatform::Xbox360,
            "xbox360",
            "Search Xbox 360 plugins",
        ))
}

fn platform_option(
    platform: SearchPlatform,
    name: &str,
    description: &str,
) -> CreateCommandOption {
    let category = platform.categories().iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "category", "Category to search")
            .required(true),
        |option, category| option.add_string_choice(category.label(), category.value()),
    );

    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
        .add_sub_option(category)
        .add_sub_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "Text to search for")
                .required(true),
        )
}

/// Handles `/search`.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let request = SearchRequest::from_options(&command.data.options())?;

    if !is_search_channel(&state.config, request.platform, command.channel_id) {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(WRONG_CHANNEL_MESSAGE)
                .ephemeral(true),
        );
        command.create_response(&ctx.http, response).await?;

        return Ok(());
    }

    command.defer_ephemeral(&ctx.http).await?;

    let service = ModSearchService::new(state.fetcher.as_ref());
    let hits = match service.search(request.category, &request.query).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!(
                "Mod search for '{}' in {} failed: {}",
                request.query,
                request.category.label(),
                e
            );
            command
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new().content(DATABASE_UNREACHABLE_MESSAGE),
                )
                .await?;

            return Ok(());
        }
    };

    let total = hits.len();
    let pages = hits
        .iter()
        .enumerate()
        .map(|(index, hit)| build_search_page(hit, index, total, state.config.embed_color))
        .collect();

    let Some(paginator) = Paginator::new(pages) else {
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content(request.no_results_message()),
            )
            .await?;

        return Ok(());
    };

    paginator.run(ctx, command).await
}
