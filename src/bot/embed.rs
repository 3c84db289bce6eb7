//! Embed builders for command replies.
//!
//! Reports and search hits are plain data; this module is the only place that
//! knows how they look in Discord.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::status::Report,
    service::search::ModSearchHit,
    util::text::{join_lines_within, or_placeholder, truncate_chars, EMBED_FIELD_LIMIT},
};

/// Builds the `/status` embed, one line per service.
///
/// # Arguments
/// - `report` - Composite report in endpoint order
/// - `color` - Embed color as hex integer
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed titled after the report
/// - `Err(AppError::InternalError)` - Report time outside Discord's range
pub fn build_status_embed(report: &Report, color: u32) -> Result<CreateEmbed, AppError> {
    let description = report
        .lines()
        .map(|line| format!("{}  {} - {}", line.glyph, line.label, line.detail))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(CreateEmbed::new()
        .title(&report.title)
        .description(description)
        .color(color)
        .timestamp(report_timestamp(report)?))
}

/// Builds the `/pstatus` or `/xstatus` embed from a one-endpoint report.
///
/// # Returns
/// - `Ok(Some(CreateEmbed))` - The scrape produced a result
/// - `Ok(None)` - The scrape was omitted; the caller shows a fallback message
/// - `Err(AppError::InternalError)` - Report time outside Discord's range
pub fn build_platform_status_embed(
    report: &Report,
    color: u32,
) -> Result<Option<CreateEmbed>, AppError> {
    let Some(line) = report.lines().next() else {
        return Ok(None);
    };

    let embed = CreateEmbed::new()
        .title(&report.title)
        .description(format!("{} ✦ {}", line.glyph, line.detail))
        .color(color)
        .timestamp(report_timestamp(report)?);

    Ok(Some(embed))
}

/// Builds one page of search results.
///
/// # Arguments
/// - `hit` - Matching entry with its resolved game title
/// - `index` - Zero-based position of the hit in the result list
/// - `total` - Number of hits in the result list
/// - `color` - Embed color as hex integer
pub fn build_search_page(hit: &ModSearchHit, index: usize, total: usize, color: u32) -> CreateEmbed {
    let entry = &hit.entry;

    let downloads = join_lines_within(
        entry
            .download_files
            .iter()
            .map(|file| format!("[{} ({})]({})", file.name, file.version, file.url)),
        EMBED_FIELD_LIMIT,
    );

    CreateEmbed::new()
        .title(&hit.game_title)
        .description(&entry.name)
        .color(color)
        .field("Platform", or_placeholder(&entry.platform), true)
        .field("Created By", or_placeholder(&entry.created_by), true)
        .field("Submitted By", or_placeholder(&entry.submitted_by), true)
        .field("Version", or_placeholder(&entry.version), true)
        .field("Game Mode", or_placeholder(&entry.game_mode), true)
        .field("Mod Type", or_placeholder(&entry.mod_type), true)
        .field(
            "Description",
            or_placeholder(truncate_chars(&entry.description, EMBED_FIELD_LIMIT)),
            false,
        )
        .field(
            "Download Files",
            or_placeholder(&downloads),
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Search Results ({}/{})",
            index + 1,
            total
        )))
}

fn report_timestamp(report: &Report) -> Result<Timestamp, AppError> {
    let seconds = report.generated_at.timestamp();

    Timestamp::from_unix_timestamp(seconds).map_err(|e| {
        AppError::InternalError(InternalError::InvalidDiscordTimestamp {
            timestamp: seconds,
            reason: e.to_string(),
        })
    })
}
