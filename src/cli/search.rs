use tabled::Table;

use crate::{
    channels::{QueryFields, format_query},
    info,
    management::UrlStore,
    success,
    types::{ChannelQuerySpec, ChannelResult, ChannelResultRow, LessonPeriod},
    utils,
    warning,
    youtube::{SearchProvider, TitleLookup},
};

/// Rebuilds the URL store for `period`.
///
/// The previous store is always deleted first. Without a lesson title nothing
/// is searched and the store stays absent. Each channel is searched in order
/// and a found URL is appended right away; a failing channel is logged and
/// skipped.
pub async fn search_and_save_urls<T, S>(
    period: LessonPeriod,
    channels: &[ChannelQuerySpec],
    titles: &T,
    searcher: &S,
    store: &UrlStore,
) -> Vec<ChannelResult>
where
    T: TitleLookup,
    S: SearchProvider,
{
    match store.reset().await {
        Ok(true) => info!("Deleted existing {}.", store.path().display()),
        Ok(false) => {}
        Err(e) => warning!("Cannot delete {}: {}", store.path().display(), e),
    }

    let raw_title = match titles.lookup_title(&period).await {
        Ok(Some(title)) => title,
        Ok(None) => {
            warning!("No title found for {}. Skipping search.", period);
            return Vec::new();
        }
        Err(e) => {
            warning!(
                "Failed to fetch a valid lesson title for {}: {}. Skipping search.",
                period,
                e
            );
            return Vec::new();
        }
    };

    let lesson_title = utils::extract_lesson_title(&raw_title);
    info!("Lesson title: {}", lesson_title);

    let fields = QueryFields {
        lesson_title: &lesson_title,
        period,
    };

    let mut results = Vec::with_capacity(channels.len());
    for channel in channels {
        let query = format_query(channel.query_template, &fields);
        info!("Searching {} for: {}", channel.key, query);

        let url = match searcher.search(&query, channel).await {
            Ok(Some(url)) => {
                success!("Found video URL: {}", url);
                if let Err(e) = store.append(&url).await {
                    warning!("Cannot write {} to {}: {}", url, store.path().display(), e);
                }
                Some(url)
            }
            Ok(None) => {
                warning!("No results found for query: {}", query);
                None
            }
            Err(e) => {
                warning!("Search on {} failed: {}", channel.key, e);
                None
            }
        };

        results.push(ChannelResult {
            channel: channel.key.to_string(),
            query,
            url,
        });
    }

    results
}

pub fn print_summary(results: &[ChannelResult]) {
    if results.is_empty() {
        return;
    }
    let rows: Vec<ChannelResultRow> = results.iter().map(ChannelResultRow::from).collect();
    println!("{}", Table::new(rows));
}
