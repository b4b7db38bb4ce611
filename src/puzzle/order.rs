use super::{PuzzleError, SortRule};

/// Index of the `-` separated token that orders non-animal URLs
const SORT_TOKEN: usize = 4;

fn sort_token(url: &str) -> Result<&str, PuzzleError> {
    url.split('-')
        .nth(SORT_TOKEN)
        .ok_or_else(|| PuzzleError::SortKey {
            url: url.to_string(),
            tokens: url.split('-').count(),
        })
}

/// Order rebuilt URLs by `rule`.
///
/// Every URL is checked before anything moves, so a bad key leaves no
/// half-sorted output behind. Equal keys keep their input order.
pub fn sort_urls(mut urls: Vec<String>, rule: SortRule) -> Result<Vec<String>, PuzzleError> {
    match rule {
        SortRule::Lexicographic => {
            urls.sort();
            Ok(urls)
        }
        SortRule::FifthToken => {
            let mut keyed = urls
                .into_iter()
                .map(|url| {
                    let key = sort_token(&url)?.to_string();
                    Ok((key, url))
                })
                .collect::<Result<Vec<_>, PuzzleError>>()?;

            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            Ok(keyed.into_iter().map(|(_, url)| url).collect())
        }
    }
}
