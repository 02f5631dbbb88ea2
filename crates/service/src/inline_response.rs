//! Packaging of rendered articles into inline query answers.

use botapi_docs_core::telegram::{
    AnswerInlineQuery, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult,
    InlineQueryResultArticle, InlineQueryResultsButton, InputTextMessageContent,
    LinkPreviewOptions, ParseMode,
};
use botapi_docs_core::{EMPTY_QUERY_CACHE_SECS, MAX_INLINE_RESULTS, NO_RESULTS_CACHE_SECS};
use botapi_docs_search::Entry;

use crate::render::render;

pub const ARTICLE_DESCRIPTION: &str = "View more details";
pub const OPEN_DOCS_LABEL: &str = "Open Docs";
pub const SEARCH_AGAIN_LABEL: &str = "Search Again";
pub const EMPTY_QUERY_BUTTON_TEXT: &str = "Type 'your_query' to search!";
pub const EMPTY_QUERY_START_PARAMETER: &str = "start";
pub const NO_RESULTS_TITLE: &str = "No Results Found!";
pub const NO_RESULTS_DESCRIPTION: &str = "No results found for your query.";

/// Which reply an inline query produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    EmptyQuery,
    NoResults,
    Results,
}

/// An inline answer not yet bound to a specific inline query id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAnswer {
    pub kind: AnswerKind,
    pub results: Vec<InlineQueryResult>,
    pub cache_time: Option<u32>,
    pub button: Option<InlineQueryResultsButton>,
}

impl InlineAnswer {
    /// Zero results and a button deep-linking the bot's start action.
    #[must_use]
    pub fn empty_query() -> Self {
        Self {
            kind: AnswerKind::EmptyQuery,
            results: Vec::new(),
            cache_time: Some(EMPTY_QUERY_CACHE_SECS),
            button: Some(InlineQueryResultsButton {
                text: EMPTY_QUERY_BUTTON_TEXT.to_owned(),
                start_parameter: Some(EMPTY_QUERY_START_PARAMETER.to_owned()),
            }),
        }
    }

    /// A single placeholder article telling the user nothing matched `query`.
    #[must_use]
    pub fn no_results(query: &str) -> Self {
        let article = InlineQueryResultArticle {
            id: article_id(),
            title: NO_RESULTS_TITLE.to_owned(),
            input_message_content: InputTextMessageContent {
                message_text: format!(
                    "<i>Sorry, I couldn't find any results for '{}'. Try searching with a different keyword!</i>",
                    escape_html(query)
                ),
                parse_mode: Some(ParseMode::Html),
                link_preview_options: None,
            },
            reply_markup: Some(InlineKeyboardMarkup {
                inline_keyboard: vec![vec![InlineKeyboardButton::switch_inline_current_chat(
                    SEARCH_AGAIN_LABEL,
                    query,
                )]],
            }),
            url: None,
            hide_url: None,
            description: Some(NO_RESULTS_DESCRIPTION.to_owned()),
        };
        Self {
            kind: AnswerKind::NoResults,
            results: vec![InlineQueryResult::Article(article)],
            cache_time: Some(NO_RESULTS_CACHE_SECS),
            button: None,
        }
    }

    /// One article per hit, at most [`MAX_INLINE_RESULTS`].
    #[must_use]
    pub fn from_hits(hits: &[Entry<'_>]) -> Self {
        Self {
            kind: AnswerKind::Results,
            results: hits.iter().take(MAX_INLINE_RESULTS).map(|hit| article(*hit)).collect(),
            cache_time: None,
            button: None,
        }
    }

    /// Binds the answer to `inline_query_id`; every answer is personal.
    #[must_use]
    pub fn into_request(self, inline_query_id: String) -> AnswerInlineQuery {
        AnswerInlineQuery {
            inline_query_id,
            results: self.results,
            cache_time: self.cache_time,
            is_personal: true,
            button: self.button,
        }
    }
}

/// Builds the article for one hit, rendering its body.
#[must_use]
pub fn article(entry: Entry<'_>) -> InlineQueryResult {
    let name = entry.name();
    let href = entry.href();
    InlineQueryResult::Article(InlineQueryResultArticle {
        id: article_id(),
        title: name.to_owned(),
        input_message_content: InputTextMessageContent {
            message_text: render(entry),
            parse_mode: Some(ParseMode::Html),
            link_preview_options: Some(LinkPreviewOptions {
                is_disabled: None,
                prefer_small_media: Some(true),
            }),
        },
        reply_markup: Some(InlineKeyboardMarkup {
            inline_keyboard: vec![
                vec![InlineKeyboardButton::url(OPEN_DOCS_LABEL, href)],
                vec![InlineKeyboardButton::switch_inline_current_chat(SEARCH_AGAIN_LABEL, name)],
            ],
        }),
        url: Some(href.to_owned()),
        hide_url: Some(true),
        description: Some(ARTICLE_DESCRIPTION.to_owned()),
    })
}

fn article_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
