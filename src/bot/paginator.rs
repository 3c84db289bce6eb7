//! Button-driven paging over a list of embeds.
//!
//! The first page is written into the command's deferred response together
//! with a row of navigation buttons. Presses by the invoking user move the
//! page; once nobody has pressed anything for `PAGINATOR_TIMEOUT` the buttons
//! are stripped and the last shown page stays.

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::error::AppError;

pub const PAGINATOR_TIMEOUT: Duration = Duration::from_secs(180);

const PAGE_INDICATOR_ID: &str = "page_indicator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl PageAction {
    pub fn custom_id(self) -> &'static str {
        match self {
            PageAction::First => "page_first",
            PageAction::Previous => "page_previous",
            PageAction::Next => "page_next",
            PageAction::Last => "page_last",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "page_first" => Some(PageAction::First),
            "page_previous" => Some(PageAction::Previous),
            "page_next" => Some(PageAction::Next),
            "page_last" => Some(PageAction::Last),
            _ => None,
        }
    }
}

pub struct Paginator {
    pages: Vec<CreateEmbed>,
    current: usize,
}

impl Paginator {
    /// Creates a paginator positioned on the first page.
    ///
    /// # Returns
    /// - `Some(Paginator)` - At least one page was given
    /// - `None` - `pages` was empty
    pub fn new(pages: Vec<CreateEmbed>) -> Option<Self> {
        if pages.is_empty() {
            return None;
        }

        Some(Self { pages, current: 0 })
    }

    /// Zero-based index of the page currently shown.
    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &CreateEmbed {
        &self.pages[self.current]
    }

    /// Moves to another page, clamped to the page range.
    ///
    /// # Returns
    /// - `true` if the current page changed
    pub fn apply(&mut self, action: PageAction) -> bool {
        let last = self.pages.len() - 1;
        let next = match action {
            PageAction::First => 0,
            PageAction::Previous => self.current.saturating_sub(1),
            PageAction::Next => (self.current + 1).min(last),
            PageAction::Last => last,
        };

        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Label of the page indicator button, e.g. "2/5".
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current + 1, self.pages.len())
    }

    /// Navigation row for the current page. A single page gets no buttons.
    pub fn components(&self) -> Vec<CreateActionRow> {
        if self.pages.len() <= 1 {
            return Vec::new();
        }

        let at_start = self.current == 0;
        let at_end = self.current == self.pages.len() - 1;

        let button = |action: PageAction, label: &str, disabled: bool| {
            CreateButton::new(action.custom_id())
                .label(label)
                .style(ButtonStyle::Primary)
                .disabled(disabled)
        };

        vec![CreateActionRow::Buttons(vec![
            button(PageAction::First, "⏮", at_start),
            button(PageAction::Previous, "◀", at_start),
            CreateButton::new(PAGE_INDICATOR_ID)
                .label(self.indicator())
                .style(ButtonStyle::Secondary)
                .disabled(true),
            button(PageAction::Next, "▶", at_end),
            button(PageAction::Last, "⏭", at_end),
        ])]
    }

    /// Applies a button press and builds the message update acknowledging it.
    ///
    /// Unknown button ids leave the page unchanged but are still acknowledged.
    pub fn handle_press(&mut self, custom_id: &str) -> CreateInteractionResponse {
        if let Some(action) = PageAction::from_custom_id(custom_id) {
            self.apply(action);
        }

        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .embed(self.current_page().clone())
                .components(self.components()),
        )
    }

    /// Shows the first page in the deferred response and serves button
    /// presses until the paginator times out.
    ///
    /// # Arguments
    /// - `ctx` - Discord context for the HTTP client and shard collector
    /// - `command` - Deferred command interaction owning the response
    ///
    /// # Returns
    /// - `Ok(())` - Paging finished and the buttons were removed
    /// - `Err(AppError::DiscordErr)` - Editing the response failed; a failed
    ///   button acknowledgement is only logged
    pub async fn run(mut self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let message = command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .embed(self.current_page().clone())
                    .components(self.components()),
            )
            .await?;

        if self.pages.len() <= 1 {
            return Ok(());
        }

        while let Some(press) = message
            .await_component_interaction(&ctx.shard)
            .author_id(command.user.id)
            .timeout(PAGINATOR_TIMEOUT)
            .await
        {
            let update = self.handle_press(&press.data.custom_id);

            if let Err(e) = press.create_response(&ctx.http, update).await {
                tracing::warn!(
                    "Failed to acknowledge page button for /{}: {:?}",
                    command.data.name,
                    e
                );
            }
        }

        tracing::debug!(
            "Paginator for /{} timed out on page {}",
            command.data.name,
            self.indicator()
        );

        command
            .edit_response(&ctx.http, EditInteractionResponse::new().components(Vec::new()))
            .await?;

        Ok(())
    }
}
