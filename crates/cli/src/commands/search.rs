use std::sync::Arc;

use anyhow::{Result, bail};
use botapi_docs_client::SpecFetcher;
use botapi_docs_core::telegram::InlineQueryResult;
use botapi_docs_search::normalize;
use botapi_docs_service::{
    AnswerKind, InlineQueryService, RefreshMode, SnapshotCache, SnapshotStore, render_method,
    render_type,
};

/// A cache that fetches on every read; the CLI answers one request per run.
fn on_demand_cache(spec_url: Option<String>) -> Result<Arc<SnapshotCache>> {
    let fetcher = match spec_url {
        Some(url) => SpecFetcher::with_url(url)?,
        None => SpecFetcher::new()?,
    };
    Ok(Arc::new(SnapshotCache::new(Arc::new(SnapshotStore::new()), Arc::new(fetcher), RefreshMode::OnDemand)))
}

pub(crate) async fn run_search(query: &str, json: bool, spec_url: Option<String>) -> Result<()> {
    let answer = InlineQueryService::new(on_demand_cache(spec_url)?).answer_for(query).await;

    if json {
        let request = answer.into_request("cli".to_owned());
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    match answer.kind {
        AnswerKind::EmptyQuery => println!("Type a method or type name to search."),
        AnswerKind::NoResults => println!("No results found for '{}'.", normalize(query)),
        AnswerKind::Results => {
            for result in &answer.results {
                let InlineQueryResult::Article(article) = result;
                println!("{}\t{}", article.title, article.url.as_deref().unwrap_or_default());
            }
        },
    }
    Ok(())
}

pub(crate) async fn run_show(name: &str, spec_url: Option<String>) -> Result<()> {
    let cache = on_demand_cache(spec_url)?;
    let stats = cache.refresh_once().await?;
    tracing::debug!(methods = stats.methods, types = stats.types, "documentation loaded");
    let snapshot = cache.store().read().await;

    let body = if let Some(method) = snapshot.methods.values().find(|m| m.name.eq_ignore_ascii_case(name)) {
        render_method(method)
    } else if let Some(ty) = snapshot.types.values().find(|t| t.name.eq_ignore_ascii_case(name)) {
        render_type(ty)
    } else {
        bail!("no method or type named '{name}'");
    };
    println!("{body}");
    Ok(())
}
